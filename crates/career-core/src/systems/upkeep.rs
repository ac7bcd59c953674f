//! Upkeep System
//!
//! Automatic per-beat decay applied regardless of what the player does.

use crate::components::Ledger;

/// Constants for upkeep
pub mod upkeep_constants {
    /// Staff salaries and office costs per month while seated
    pub const ELECTED_MONTHLY_COST: i64 = 20;
    /// Monthly costs while out of office
    pub const UNELECTED_MONTHLY_COST: i64 = 5;
    /// Approval lost each month when nothing happens
    pub const APPROVAL_DECAY: f64 = 0.5;
    /// Extra monthly approval loss while out of office
    pub const UNELECTED_APPROVAL_PENALTY: f64 = 1.0;
    pub const RULING_APPROVAL_DECAY: f64 = 0.1;
    pub const RULING_APPROVAL_MIN: f64 = 10.0;
    pub const RULING_APPROVAL_MAX: f64 = 90.0;
    /// Daily campaign spending
    pub const CAMPAIGN_DAY_COST: i64 = 10;
}

use upkeep_constants::*;

/// Apply one month of upkeep to the ledger
pub fn apply_monthly_upkeep(ledger: &mut Ledger) {
    let player = &mut ledger.player;
    if player.is_elected {
        player.funds -= ELECTED_MONTHLY_COST;
        player.adjust_approval(-APPROVAL_DECAY);
    } else {
        player.funds -= UNELECTED_MONTHLY_COST;
        // Both losses land before the floor is applied
        player.adjust_approval(-(APPROVAL_DECAY + UNELECTED_APPROVAL_PENALTY));
    }

    let chamber = &mut ledger.chamber;
    chamber.ruling_party_approval = (chamber.ruling_party_approval - RULING_APPROVAL_DECAY)
        .clamp(RULING_APPROVAL_MIN, RULING_APPROVAL_MAX);

    tracing::debug!(
        funds = ledger.player.funds,
        approval = ledger.player.approval,
        ruling_approval = ledger.chamber.ruling_party_approval,
        "Monthly upkeep applied"
    );
}

/// Apply one campaign day's spending
pub fn apply_campaign_day_cost(ledger: &mut Ledger) {
    ledger.player.funds -= CAMPAIGN_DAY_COST;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elected_upkeep() {
        let mut ledger = Ledger::default();
        apply_monthly_upkeep(&mut ledger);
        assert_eq!(ledger.player.funds, 480);
        assert_eq!(ledger.player.approval, 39.5);
        assert!((ledger.chamber.ruling_party_approval - 44.9).abs() < 1e-9);
    }

    #[test]
    fn test_unelected_upkeep() {
        let mut ledger = Ledger::default();
        ledger.player.lose_seat();
        apply_monthly_upkeep(&mut ledger);
        assert_eq!(ledger.player.funds, 495);
        assert_eq!(ledger.player.approval, 38.5);
    }

    #[test]
    fn test_approval_floor_at_zero() {
        let mut ledger = Ledger::default();
        ledger.player.lose_seat();
        ledger.player.approval = 1.2;
        apply_monthly_upkeep(&mut ledger);
        assert_eq!(ledger.player.approval, 0.0);
    }

    #[test]
    fn test_ruling_approval_clamped() {
        let mut ledger = Ledger::default();
        ledger.chamber.ruling_party_approval = 10.05;
        apply_monthly_upkeep(&mut ledger);
        assert_eq!(ledger.chamber.ruling_party_approval, RULING_APPROVAL_MIN);

        ledger.chamber.ruling_party_approval = 97.0;
        apply_monthly_upkeep(&mut ledger);
        assert_eq!(ledger.chamber.ruling_party_approval, RULING_APPROVAL_MAX);
    }

    #[test]
    fn test_campaign_day_cost() {
        let mut ledger = Ledger::default();
        apply_campaign_day_cost(&mut ledger);
        assert_eq!(ledger.player.funds, 490);
    }
}
