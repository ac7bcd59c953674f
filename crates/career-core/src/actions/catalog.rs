//! Catalog Data
//!
//! Titles, costs, and phase availability. No behaviour lives here; see
//! `effects` for what each action does.

use career_events::GamePhase;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ActionError;

/// Every action the player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    /// Local campaigning in the home district
    Campaign,
    /// Fundraising party
    Fundraising,
    /// Policy study group
    PolicyStudy,
    /// Faction meeting with the party elders
    FactionMeeting,
    /// Street-corner speech during an election
    StumpSpeech,
    /// Televised candidates' debate
    TelevisedDebate,
}

impl ActionId {
    /// External identifier used by front ends
    pub fn key(self) -> &'static str {
        match self {
            ActionId::Campaign => "campaign",
            ActionId::Fundraising => "fundraising",
            ActionId::PolicyStudy => "policy",
            ActionId::FactionMeeting => "faction_meeting",
            ActionId::StumpSpeech => "stump_speech",
            ActionId::TelevisedDebate => "debate",
        }
    }

    /// Catalog entry for this action
    pub fn spec(self) -> &'static ActionSpec {
        match self {
            ActionId::Campaign => &NORMAL_CATALOG[0],
            ActionId::Fundraising => &NORMAL_CATALOG[1],
            ActionId::PolicyStudy => &NORMAL_CATALOG[2],
            ActionId::FactionMeeting => &NORMAL_CATALOG[3],
            ActionId::StumpSpeech => &ELECTION_CATALOG[0],
            ActionId::TelevisedDebate => &ELECTION_CATALOG[1],
        }
    }

    pub fn all() -> &'static [ActionId] {
        &[
            ActionId::Campaign,
            ActionId::Fundraising,
            ActionId::PolicyStudy,
            ActionId::FactionMeeting,
            ActionId::StumpSpeech,
            ActionId::TelevisedDebate,
        ]
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ActionId {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        ActionId::all()
            .iter()
            .copied()
            .find(|id| id.key() == key)
            .ok_or_else(|| ActionError::UnknownActionId(s.to_string()))
    }
}

/// Which catalog an action belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPhase {
    Normal,
    Election,
}

impl ActionPhase {
    /// Whether actions of this catalog may run in the given game phase
    pub fn permits(self, phase: GamePhase) -> bool {
        matches!(
            (self, phase),
            (ActionPhase::Normal, GamePhase::Normal)
                | (ActionPhase::Election, GamePhase::ElectionCampaign)
        )
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSpec {
    pub id: ActionId,
    pub title: &'static str,
    /// Man-yen, charged when the effect applies
    pub cost: i64,
    pub phase: ActionPhase,
}

/// Actions available month to month
pub const NORMAL_CATALOG: [ActionSpec; 4] = [
    ActionSpec {
        id: ActionId::Campaign,
        title: "Local campaigning",
        cost: 50,
        phase: ActionPhase::Normal,
    },
    ActionSpec {
        id: ActionId::Fundraising,
        title: "Fundraising party",
        cost: 10,
        phase: ActionPhase::Normal,
    },
    ActionSpec {
        id: ActionId::PolicyStudy,
        title: "Policy study group",
        cost: 30,
        phase: ActionPhase::Normal,
    },
    ActionSpec {
        id: ActionId::FactionMeeting,
        title: "Faction meeting",
        cost: 0,
        phase: ActionPhase::Normal,
    },
];

/// Actions available on campaign days
pub const ELECTION_CATALOG: [ActionSpec; 2] = [
    ActionSpec {
        id: ActionId::StumpSpeech,
        title: "Street-corner speech",
        cost: 20,
        phase: ActionPhase::Election,
    },
    ActionSpec {
        id: ActionId::TelevisedDebate,
        title: "Televised debate",
        cost: 100,
        phase: ActionPhase::Election,
    },
];

/// Catalog offered in the given phase (empty once concluded)
pub fn catalog_for(phase: GamePhase) -> &'static [ActionSpec] {
    match phase {
        GamePhase::Normal => &NORMAL_CATALOG,
        GamePhase::ElectionCampaign => &ELECTION_CATALOG,
        GamePhase::Concluded => &[],
    }
}
