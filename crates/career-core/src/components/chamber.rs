//! Chamber Components
//!
//! Composition of the lower house and the ruling party's national approval.

use career_events::{ChamberSnapshot, TOTAL_SEATS};
use serde::{Deserialize, Serialize};

/// Lower house state.
///
/// Only the ruling party's seats are stored; the opposition is always
/// derived as `TOTAL_SEATS - ruling_party_seats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChamberState {
    ruling_party_seats: u32,
    pub ruling_party_approval: f64,
}

impl Default for ChamberState {
    fn default() -> Self {
        Self {
            ruling_party_seats: 261,
            ruling_party_approval: 45.0,
        }
    }
}

impl ChamberState {
    pub fn new(ruling_party_seats: u32, ruling_party_approval: f64) -> Self {
        Self {
            ruling_party_seats: ruling_party_seats.min(TOTAL_SEATS),
            ruling_party_approval,
        }
    }

    pub fn ruling_party_seats(&self) -> u32 {
        self.ruling_party_seats
    }

    pub fn opposition_seats(&self) -> u32 {
        TOTAL_SEATS - self.ruling_party_seats
    }

    /// Set the ruling party's seats, capped at the size of the house
    pub fn set_ruling_party_seats(&mut self, seats: u32) {
        self.ruling_party_seats = seats.min(TOTAL_SEATS);
    }

    /// Strict majority: more than half of all seats
    pub fn has_ruling_majority(&self) -> bool {
        self.ruling_party_seats * 2 > TOTAL_SEATS
    }

    pub fn snapshot(&self) -> ChamberSnapshot {
        ChamberSnapshot {
            total_seats: TOTAL_SEATS,
            ruling_party_seats: self.ruling_party_seats,
            opposition_seats: self.opposition_seats(),
            ruling_party_approval: self.ruling_party_approval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposition_is_derived() {
        let mut chamber = ChamberState::default();
        assert_eq!(chamber.ruling_party_seats() + chamber.opposition_seats(), TOTAL_SEATS);

        chamber.set_ruling_party_seats(120);
        assert_eq!(chamber.opposition_seats(), 345);

        chamber.set_ruling_party_seats(9_999);
        assert_eq!(chamber.ruling_party_seats(), TOTAL_SEATS);
        assert_eq!(chamber.opposition_seats(), 0);
    }

    #[test]
    fn test_majority_is_strict() {
        let mut chamber = ChamberState::new(232, 40.0);
        assert!(!chamber.has_ruling_majority());
        chamber.set_ruling_party_seats(233);
        assert!(chamber.has_ruling_majority());
    }
}
