//! Ledger Enums
//!
//! Closed enumerations for the player's office, party standing, and the
//! phase of the session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seats in the lower house. Constant for the whole session.
pub const TOTAL_SEATS: u32 = 465;

/// Office currently held by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Sitting member of the lower house
    #[default]
    Representative,
    /// Cabinet post reached on the second promotion rung
    DeputyChiefCabinetSecretary,
    /// Eligible to contest the party leadership
    PartyLeadershipCandidate,
    PrimeMinister,
    /// Lost the seat; campaigning as an independent
    OutOfOffice,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Representative => write!(f, "Member of the House of Representatives"),
            Position::DeputyChiefCabinetSecretary => write!(f, "Deputy Chief Cabinet Secretary"),
            Position::PartyLeadershipCandidate => write!(f, "Party Leadership Candidate"),
            Position::PrimeMinister => write!(f, "Prime Minister"),
            Position::OutOfOffice => write!(f, "Independent (out of office)"),
        }
    }
}

/// Standing inside the ruling party, lowest first
///
/// Variant order is the ladder order, so the derived `Ord` compares rungs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum PartyRank {
    #[default]
    Backbencher,
    ViceMinisterTier,
    MinisterTier,
    PartyLeader,
}

impl fmt::Display for PartyRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyRank::Backbencher => write!(f, "Backbencher"),
            PartyRank::ViceMinisterTier => write!(f, "Vice-Minister tier"),
            PartyRank::MinisterTier => write!(f, "Minister tier"),
            PartyRank::PartyLeader => write!(f, "Party Leader"),
        }
    }
}

/// Phase of the session state machine. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Monthly cadence
    #[default]
    Normal,
    /// Daily cadence: twelve campaign days and one tally day
    ElectionCampaign,
    /// Terminal; no further mutation
    Concluded,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Normal => write!(f, "normal"),
            GamePhase::ElectionCampaign => write!(f, "election campaign"),
            GamePhase::Concluded => write!(f, "concluded"),
        }
    }
}

/// Why a session concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// Funds went negative while holding a seat
    Bankruptcy,
    /// Approval fell below the low-water mark while holding a seat
    LostConfidence,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ending::Bankruptcy => write!(f, "bankruptcy"),
            Ending::LostConfidence => write!(f, "loss of public confidence"),
        }
    }
}
