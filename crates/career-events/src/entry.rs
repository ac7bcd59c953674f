//! Narration Entries
//!
//! Records appended to the message log and consumed by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::turn::TurnLabel;

/// Category of a narration entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Welcome and other general notices
    Notice,
    /// Result of a successful action
    Action,
    /// An action was refused for lack of funds
    Shortfall,
    Promotion,
    /// Random event from the event table
    Event,
    Birthday,
    /// Campaign announcement and the tally
    Election,
    Poll,
    Ascension,
    /// Game-over banner and reason
    Termination,
}

impl EntryKind {
    /// Whether entries of this kind are shown emphasised by default
    pub fn highlighted_by_default(self) -> bool {
        matches!(
            self,
            EntryKind::Shortfall
                | EntryKind::Promotion
                | EntryKind::Event
                | EntryKind::Election
                | EntryKind::Ascension
                | EntryKind::Termination
        )
    }
}

/// One line of narration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Sequential identifier, e.g. "msg_00000042"
    pub id: String,
    pub kind: EntryKind,
    pub text: String,
    pub highlighted: bool,
    pub turn_label: TurnLabel,
}

impl LogEntry {
    pub fn new(id: impl Into<String>, kind: EntryKind, text: impl Into<String>, turn_label: TurnLabel) -> Self {
        Self {
            id: id.into(),
            kind,
            text: text.into(),
            highlighted: kind.highlighted_by_default(),
            turn_label,
        }
    }

    pub fn with_highlight(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}
