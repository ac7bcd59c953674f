//! Snapshot Types
//!
//! Read-only projection of a session for rendering.
//!
//! Snapshots are copies: nothing written to a snapshot flows back into the
//! session that produced it.

use serde::{Deserialize, Serialize};

use crate::ledger::{Ending, GamePhase, PartyRank, Position};
use crate::turn::TurnLabel;

/// Player attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub age: u32,
    pub position: Position,
    pub party_rank: PartyRank,
    /// Funds in man-yen
    pub funds: i64,
    pub approval: f64,
    pub influence: f64,
    pub is_elected: bool,
    pub is_prime_minister: bool,
}

/// Lower house composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChamberSnapshot {
    pub total_seats: u32,
    pub ruling_party_seats: u32,
    pub opposition_seats: u32,
    pub ruling_party_approval: f64,
}

impl ChamberSnapshot {
    /// True when the ruling party holds a strict majority
    pub fn ruling_majority(&self) -> bool {
        self.ruling_party_seats * 2 > self.total_seats
    }
}

/// Session clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub turn_index: u32,
    pub months_until_election: i32,
    pub election_day: u8,
    pub turn_label: TurnLabel,
}

/// Complete session state at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: GamePhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending: Option<Ending>,
    pub player: PlayerSnapshot,
    pub chamber: ChamberSnapshot,
    pub clock: ClockSnapshot,
    /// Number of narration entries written so far
    pub log_len: usize,
}

impl SessionSnapshot {
    pub fn is_concluded(&self) -> bool {
        self.phase == GamePhase::Concluded
    }
}
