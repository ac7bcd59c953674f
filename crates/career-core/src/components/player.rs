//! Player Components
//!
//! The player's personal ledger: money, standing with voters, and standing
//! inside the party.

use career_events::{PartyRank, PlayerSnapshot, Position};
use serde::{Deserialize, Serialize};

/// Name used when the player leaves the name prompt blank
pub const DEFAULT_PLAYER_NAME: &str = "Taro Tanaka";

/// Attributes of the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub age: u32,
    pub position: Position,
    pub party_rank: PartyRank,
    /// Man-yen. May go negative; that ends the run while seated.
    pub funds: i64,
    /// Never below zero; no upper cap
    pub approval: f64,
    pub influence: f64,
    pub is_elected: bool,
    pub is_prime_minister: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            age: 35,
            position: Position::Representative,
            party_rank: PartyRank::Backbencher,
            funds: 500,
            approval: 40.0,
            influence: 10.0,
            is_elected: true,
            is_prime_minister: false,
        }
    }
}

impl PlayerState {
    /// Fresh freshman legislator with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            ..Self::default()
        }
    }

    /// Shift approval, flooring at zero
    pub fn adjust_approval(&mut self, delta: f64) {
        self.approval = (self.approval + delta).max(0.0);
    }

    pub fn is_out_of_office(&self) -> bool {
        !self.is_elected
    }

    /// Strip the seat and any office, as after a lost election
    pub fn lose_seat(&mut self) {
        self.is_elected = false;
        self.is_prime_minister = false;
        self.position = Position::OutOfOffice;
        self.party_rank = PartyRank::Backbencher;
    }

    /// Return to the house as a freshman; earlier promotions are gone
    pub fn regain_seat(&mut self) {
        self.is_elected = true;
        self.is_prime_minister = false;
        self.position = Position::Representative;
        self.party_rank = PartyRank::Backbencher;
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            name: self.name.clone(),
            age: self.age,
            position: self.position,
            party_rank: self.party_rank,
            funds: self.funds,
            approval: self.approval,
            influence: self.influence,
            is_elected: self.is_elected,
            is_prime_minister: self.is_prime_minister,
        }
    }
}

/// Trim a player-supplied name, falling back to the default when blank
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
