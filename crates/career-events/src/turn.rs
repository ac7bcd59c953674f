//! Turn Labels
//!
//! The human-readable beat a narration entry was written in.
//!
//! # Example
//!
//! ```
//! use career_events::TurnLabel;
//!
//! assert_eq!(TurnLabel::Month(12).to_string(), "month 12");
//! assert_eq!("election day 3".parse::<TurnLabel>().unwrap(), TurnLabel::ElectionDay(3));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Beat label attached to every log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnLabel {
    /// 1-based month counter of the Normal phase
    Month(u32),
    /// Day of the election campaign (0 on announcement, 13 on tally)
    ElectionDay(u8),
    /// Written after the session concluded
    Final,
}

impl fmt::Display for TurnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnLabel::Month(m) => write!(f, "month {}", m),
            TurnLabel::ElectionDay(d) => write!(f, "election day {}", d),
            TurnLabel::Final => write!(f, "final"),
        }
    }
}

/// Error type for parsing a TurnLabel from a string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseTurnLabelError {
    InvalidFormat(String),
    InvalidNumber(String),
}

impl fmt::Display for ParseTurnLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTurnLabelError::InvalidFormat(s) => write!(
                f,
                "invalid turn label: '{}', expected 'month N', 'election day N' or 'final'",
                s
            ),
            ParseTurnLabelError::InvalidNumber(s) => write!(f, "invalid number: '{}'", s),
        }
    }
}

impl std::error::Error for ParseTurnLabelError {}

impl FromStr for TurnLabel {
    type Err = ParseTurnLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "final" {
            return Ok(TurnLabel::Final);
        }
        if let Some(rest) = trimmed.strip_prefix("month ") {
            return rest
                .parse::<u32>()
                .map(TurnLabel::Month)
                .map_err(|_| ParseTurnLabelError::InvalidNumber(rest.to_string()));
        }
        if let Some(rest) = trimmed.strip_prefix("election day ") {
            return rest
                .parse::<u8>()
                .map(TurnLabel::ElectionDay)
                .map_err(|_| ParseTurnLabelError::InvalidNumber(rest.to_string()));
        }
        Err(ParseTurnLabelError::InvalidFormat(s.to_string()))
    }
}

// Serialized as the display string
impl Serialize for TurnLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TurnLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
