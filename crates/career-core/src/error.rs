//! Error Types
//!
//! `InsufficientFunds` is the only recoverable action error. The phase and
//! id errors are caller bugs surfaced at the boundary instead of being
//! swallowed.

use career_events::GamePhase;
use thiserror::Error;

use crate::actions::ActionId;

/// Errors returned by action invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("insufficient funds for {action}: need {required} man-yen, have {available}")]
    InsufficientFunds {
        action: ActionId,
        required: i64,
        available: i64,
    },
    #[error("{action} cannot be taken during the {phase} phase")]
    InvalidPhaseForAction { action: ActionId, phase: GamePhase },
    #[error("unknown action id: '{0}'")]
    UnknownActionId(String),
}

impl ActionError {
    /// Only a funds shortfall can be retried after the ledger changes
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ActionError::InsufficientFunds { .. })
    }
}

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ActionError::InsufficientFunds {
            action: ActionId::Campaign,
            required: 50,
            available: 20,
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds for campaign: need 50 man-yen, have 20"
        );
        assert!(err.is_recoverable());

        let err = ActionError::InvalidPhaseForAction {
            action: ActionId::StumpSpeech,
            phase: GamePhase::Normal,
        };
        assert_eq!(
            err.to_string(),
            "stump_speech cannot be taken during the normal phase"
        );
        assert!(!err.is_recoverable());

        assert!(!ActionError::UnknownActionId("bribe".into()).is_recoverable());
    }
}
