//! Session Clock
//!
//! Months elapsed, the countdown to the next general election, and the
//! campaign day counter.

use career_events::{ClockSnapshot, GamePhase, TurnLabel};
use serde::{Deserialize, Serialize};

/// Months between general elections
pub const ELECTION_CYCLE_MONTHS: i32 = 48;
/// Campaigning days before the tally day
pub const CAMPAIGN_DAYS: u8 = 12;
/// Months per year of the player's age
pub const MONTHS_PER_YEAR: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    /// Months elapsed in the Normal phase
    pub turn_index: u32,
    pub months_until_election: i32,
    /// 0 outside the campaign
    pub election_day: u8,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            turn_index: 0,
            months_until_election: ELECTION_CYCLE_MONTHS,
            election_day: 0,
        }
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_campaign(&mut self) {
        self.election_day = 0;
    }

    /// Campaign finished: day counter back to zero and a full cycle ahead
    pub fn reset_after_election(&mut self) {
        self.election_day = 0;
        self.months_until_election = ELECTION_CYCLE_MONTHS;
    }

    /// True on the month that completes a year
    pub fn is_year_boundary(&self) -> bool {
        self.turn_index > 0 && self.turn_index % MONTHS_PER_YEAR == 0
    }

    pub fn turn_label(&self, phase: GamePhase) -> TurnLabel {
        match phase {
            GamePhase::Normal => TurnLabel::Month(self.turn_index + 1),
            GamePhase::ElectionCampaign => TurnLabel::ElectionDay(self.election_day),
            GamePhase::Concluded => TurnLabel::Final,
        }
    }

    pub fn snapshot(&self, phase: GamePhase) -> ClockSnapshot {
        ClockSnapshot {
            turn_index: self.turn_index,
            months_until_election: self.months_until_election,
            election_day: self.election_day,
            turn_label: self.turn_label(phase),
        }
    }
}
