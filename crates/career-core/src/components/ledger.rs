//! Resource Ledger
//!
//! The mutation target shared by actions, upkeep, events, and elections.

use serde::{Deserialize, Serialize};

use super::chamber::ChamberState;
use super::player::PlayerState;

/// Player and chamber attributes owned by one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub player: PlayerState,
    pub chamber: ChamberState,
}

impl Ledger {
    pub fn new(player: PlayerState, chamber: ChamberState) -> Self {
        Self { player, chamber }
    }
}

/// A bounded change to the ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerDelta {
    pub funds: i64,
    pub approval: f64,
    pub influence: f64,
    pub ruling_party_approval: f64,
}

impl LedgerDelta {
    pub const fn funds(amount: i64) -> Self {
        Self {
            funds: amount,
            approval: 0.0,
            influence: 0.0,
            ruling_party_approval: 0.0,
        }
    }

    pub const fn approval(amount: f64) -> Self {
        Self {
            funds: 0,
            approval: amount,
            influence: 0.0,
            ruling_party_approval: 0.0,
        }
    }

    pub const fn with_influence(self, amount: f64) -> Self {
        Self {
            influence: amount,
            ..self
        }
    }

    pub const fn with_approval(self, amount: f64) -> Self {
        Self {
            approval: amount,
            ..self
        }
    }

    pub const fn with_ruling_party_approval(self, amount: f64) -> Self {
        Self {
            ruling_party_approval: amount,
            ..self
        }
    }

    /// Apply to the ledger. Player approval floors at zero.
    pub fn apply(&self, ledger: &mut Ledger) {
        ledger.player.funds += self.funds;
        ledger.player.adjust_approval(self.approval);
        ledger.player.influence += self.influence;
        ledger.chamber.ruling_party_approval += self.ruling_party_approval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_apply() {
        let mut ledger = Ledger::default();
        let delta = LedgerDelta::funds(100)
            .with_approval(-2.0)
            .with_influence(3.0)
            .with_ruling_party_approval(-1.5);
        delta.apply(&mut ledger);

        assert_eq!(ledger.player.funds, 600);
        assert_eq!(ledger.player.approval, 38.0);
        assert_eq!(ledger.player.influence, 13.0);
        assert_eq!(ledger.chamber.ruling_party_approval, 43.5);
    }

    #[test]
    fn test_delta_respects_approval_floor() {
        let mut ledger = Ledger::default();
        ledger.player.approval = 1.0;
        LedgerDelta::approval(-5.0).apply(&mut ledger);
        assert_eq!(ledger.player.approval, 0.0);
    }
}
