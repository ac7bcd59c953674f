//! Termination Checks
//!
//! Run after every state-mutating step. Only a seated player can be
//! knocked out; a player who lost their seat keeps playing out of office.

use career_events::Ending;

use crate::components::PlayerState;

/// Approval below this while seated ends the run
pub const APPROVAL_LOW_WATER: f64 = 10.0;

pub fn check_termination(player: &PlayerState) -> Option<Ending> {
    if !player.is_elected {
        return None;
    }
    if player.funds < 0 {
        return Some(Ending::Bankruptcy);
    }
    if player.approval < APPROVAL_LOW_WATER {
        return Some(Ending::LostConfidence);
    }
    None
}

/// Closing narration for an ending
pub fn ending_message(ending: Ending) -> &'static str {
    match ending {
        Ending::Bankruptcy => "Your funds have run dry and political life is no longer possible...",
        Ending::LostConfidence => "You have lost the public's support entirely and resigned your seat...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_player_continues() {
        assert_eq!(check_termination(&PlayerState::default()), None);
    }

    #[test]
    fn test_bankruptcy() {
        let mut player = PlayerState::default();
        player.funds = -1;
        assert_eq!(check_termination(&player), Some(Ending::Bankruptcy));
        player.funds = 0;
        assert_eq!(check_termination(&player), None);
    }

    #[test]
    fn test_low_water_mark() {
        let mut player = PlayerState::default();
        player.approval = 9.99;
        assert_eq!(check_termination(&player), Some(Ending::LostConfidence));
        player.approval = APPROVAL_LOW_WATER;
        assert_eq!(check_termination(&player), None);
    }

    #[test]
    fn test_out_of_office_is_never_terminal() {
        let mut player = PlayerState::default();
        player.lose_seat();
        player.funds = -500;
        player.approval = 0.0;
        assert_eq!(check_termination(&player), None);
    }
}
