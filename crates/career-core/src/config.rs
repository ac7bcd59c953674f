//! Configuration System
//!
//! Session setup loaded from a TOML file: seed, starting ledger, and the
//! display window. Game rules are constants and are not configurable.

use serde::{Deserialize, Serialize};
use std::path::Path;

use career_events::TOTAL_SEATS;

use crate::components::{ChamberState, GameClock, Ledger, PlayerState, DEFAULT_PLAYER_NAME};
use crate::error::ConfigError;
use crate::events::DEFAULT_DISPLAY_WINDOW;

/// Default config file path
pub const DEFAULT_CONFIG_PATH: &str = "career.toml";

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CareerConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub chamber: ChamberConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl CareerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the given path, or use defaults if it cannot be read
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::from_file(path).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", path.display(), e);
            Self::default()
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chamber.ruling_party_seats > TOTAL_SEATS {
            return Err(ConfigError::Invalid(format!(
                "chamber.ruling_party_seats must be at most {}, got {}",
                TOTAL_SEATS, self.chamber.ruling_party_seats
            )));
        }
        if self.log.display_window == 0 {
            return Err(ConfigError::Invalid(
                "log.display_window must be at least 1".to_string(),
            ));
        }
        if !self.player.approval.is_finite() || self.player.approval < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "player.approval must be a non-negative number, got {}",
                self.player.approval
            )));
        }
        if !self.player.influence.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "player.influence must be a finite number, got {}",
                self.player.influence
            )));
        }
        if !self.chamber.ruling_party_approval.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "chamber.ruling_party_approval must be a finite number, got {}",
                self.chamber.ruling_party_approval
            )));
        }
        Ok(())
    }

    /// Starting ledger described by this configuration
    pub fn initial_ledger(&self) -> Ledger {
        let player = PlayerState {
            age: self.player.age,
            funds: self.player.funds,
            approval: self.player.approval,
            influence: self.player.influence,
            ..PlayerState::new(&self.player.name)
        };
        let chamber = ChamberState::new(
            self.chamber.ruling_party_seats,
            self.chamber.ruling_party_approval,
        );
        Ledger::new(player, chamber)
    }

    pub fn initial_clock(&self) -> GameClock {
        GameClock::new()
    }
}

/// Session parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Random seed for reproducible narration
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Starting player ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub age: u32,
    pub funds: i64,
    pub approval: f64,
    pub influence: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let player = PlayerState::default();
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            age: player.age,
            funds: player.funds,
            approval: player.approval,
            influence: player.influence,
        }
    }
}

/// Starting lower-house composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChamberConfig {
    pub ruling_party_seats: u32,
    pub ruling_party_approval: f64,
}

impl Default for ChamberConfig {
    fn default() -> Self {
        let chamber = ChamberState::default();
        Self {
            ruling_party_seats: chamber.ruling_party_seats(),
            ruling_party_approval: chamber.ruling_party_approval,
        }
    }
}

/// Message log settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Entries shown at once
    pub display_window: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            display_window: DEFAULT_DISPLAY_WINDOW,
        }
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Road to Kantei configuration

[session]
seed = 42

[player]
name = "Taro Tanaka"
age = 35
funds = 500
approval = 40.0
influence = 10.0

[chamber]
ruling_party_seats = 261
ruling_party_approval = 45.0

[log]
display_window = 20
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CareerConfig::default();
        assert_eq!(config.session.seed, 42);
        assert_eq!(config.player.funds, 500);
        assert_eq!(config.log.display_window, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_toml_matches_defaults() {
        let parsed = CareerConfig::from_str(&default_config_toml()).unwrap();
        assert_eq!(parsed, CareerConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = CareerConfig::from_str("[player]\nname = \"Hanako Sato\"\n").unwrap();
        assert_eq!(config.player.name, "Hanako Sato");
        assert_eq!(config.player.funds, 500);
        assert_eq!(config.chamber.ruling_party_seats, 261);
    }

    #[test]
    fn test_invalid_values() {
        let err = CareerConfig::from_str("[chamber]\nruling_party_seats = 500\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = CareerConfig::from_str("[log]\ndisplay_window = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = CareerConfig::from_str("[chamber]\nruling_party_approval = nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = CareerConfig::from_str("[player]\ninfluence = inf\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = CareerConfig::from_str("[player\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let mut config = CareerConfig::default();
        config.session.seed = 7;
        let text = config.to_toml().unwrap();
        assert_eq!(CareerConfig::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nseed = 99").unwrap();
        let config = CareerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.session.seed, 99);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = CareerConfig::load_or_default(dir.path().join("absent.toml"));
        assert_eq!(config, CareerConfig::default());
    }

    #[test]
    fn test_initial_ledger() {
        let mut config = CareerConfig::default();
        config.player.name = "  ".to_string();
        config.player.funds = 1_000;
        let ledger = config.initial_ledger();
        assert_eq!(ledger.player.name, DEFAULT_PLAYER_NAME);
        assert_eq!(ledger.player.funds, 1_000);
        assert!(ledger.player.is_elected);
    }
}
