//! Promotion Engine
//!
//! The party ladder as an explicit transition table. Evaluation is pure;
//! applying a rung is a separate step so the caller can narrate it.
//!
//! ```text
//! Representative/Backbencher
//!   -> Representative/ViceMinisterTier
//!   -> DeputyChiefCabinetSecretary/MinisterTier
//!   -> PartyLeadershipCandidate/MinisterTier
//!   -> PrimeMinister/PartyLeader   (ascension, see qualifies_for_ascension)
//! ```

use career_events::{PartyRank, Position};

use crate::components::Ledger;

/// What a rung demands of the ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    InfluenceAndApproval { influence: f64, approval: f64 },
    /// Influence plus a ruling-party majority in the house
    InfluenceAndMajority { influence: f64 },
}

impl Requirement {
    pub fn is_met(&self, ledger: &Ledger) -> bool {
        match *self {
            Requirement::InfluenceAndApproval { influence, approval } => {
                ledger.player.influence >= influence && ledger.player.approval >= approval
            }
            Requirement::InfluenceAndMajority { influence } => {
                ledger.player.influence >= influence && ledger.chamber.has_ruling_majority()
            }
        }
    }
}

/// One step of the ladder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub from: (Position, PartyRank),
    pub to: (Position, PartyRank),
    pub requirement: Requirement,
    pub headline: &'static str,
}

/// Ladder below the premiership, lowest rung first
pub const LADDER: [Rung; 3] = [
    Rung {
        from: (Position::Representative, PartyRank::Backbencher),
        to: (Position::Representative, PartyRank::ViceMinisterTier),
        requirement: Requirement::InfluenceAndApproval {
            influence: 50.0,
            approval: 50.0,
        },
        headline: "BREAKING: You have been appointed to a vice-minister post!",
    },
    Rung {
        from: (Position::Representative, PartyRank::ViceMinisterTier),
        to: (Position::DeputyChiefCabinetSecretary, PartyRank::MinisterTier),
        requirement: Requirement::InfluenceAndApproval {
            influence: 100.0,
            approval: 60.0,
        },
        headline: "BIG NEWS: You join the cabinet's inner circle as Deputy Chief Cabinet Secretary!",
    },
    Rung {
        from: (Position::DeputyChiefCabinetSecretary, PartyRank::MinisterTier),
        to: (Position::PartyLeadershipCandidate, PartyRank::MinisterTier),
        requirement: Requirement::InfluenceAndMajority { influence: 150.0 },
        headline: "The party's power brokers now whisper your name as its next leader.",
    },
];

const PRIME_MINISTER_HEADLINE: &str =
    "CONGRATULATIONS! The Diet has named you Prime Minister of Japan!";

/// The rung the player is eligible to climb right now, if any.
///
/// At most one rung is returned, and only the one starting from the
/// player's current pair, so rungs are never skipped.
pub fn evaluate_promotion(ledger: &Ledger) -> Option<&'static Rung> {
    if !ledger.player.is_elected {
        return None;
    }
    let current = (ledger.player.position, ledger.player.party_rank);
    LADDER
        .iter()
        .find(|rung| rung.from == current)
        .filter(|rung| rung.requirement.is_met(ledger))
}

/// Move the player onto the rung and return its headline
pub fn apply_rung(ledger: &mut Ledger, rung: &Rung) -> &'static str {
    let (position, rank) = rung.to;
    ledger.player.position = position;
    ledger.player.party_rank = rank;
    rung.headline
}

/// Seated leadership candidate whose party holds the house
pub fn qualifies_for_ascension(ledger: &Ledger) -> bool {
    let player = &ledger.player;
    !player.is_prime_minister
        && player.is_elected
        && player.position == Position::PartyLeadershipCandidate
        && ledger.chamber.has_ruling_majority()
}

/// Install the player as Prime Minister and return the headline
pub fn apply_ascension(ledger: &mut Ledger) -> &'static str {
    let player = &mut ledger.player;
    player.is_prime_minister = true;
    player.position = Position::PrimeMinister;
    player.party_rank = PartyRank::PartyLeader;
    PRIME_MINISTER_HEADLINE
}
