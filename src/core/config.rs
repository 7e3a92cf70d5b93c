//! Game mode and engine configuration.
//!
//! - `Mode`: who sits on the other side of the board
//! - `EngineConfig`: computer think delay and RNG seed
//!
//! The presentation layer picks a mode per game; the config is fixed for
//! the lifetime of an engine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, ParseError, Result};

/// Default simulated "thinking" time before the computer moves.
pub const DEFAULT_THINK_DELAY_MS: u64 = 350;

/// Longest think delay a config may ask for.
pub const MAX_THINK_DELAY_MS: u64 = 10_000;

/// Who plays against whom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two humans sharing the board.
    Pvp,
    /// Human against the random-move computer.
    Pve,
}

impl Mode {
    /// Wire name used by the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Pvp => "pvp",
            Mode::Pve => "pve",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(Mode::Pvp),
            "pve" => Ok(Mode::Pve),
            _ => Err(ParseError::Mode(s.trim().to_string())),
        }
    }
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How long the computer "thinks" before its move lands, in milliseconds.
    pub think_delay_ms: u64,

    /// Seed for the computer's move RNG.
    /// Same seed produces the same computer moves for the same inputs.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Set the think delay in milliseconds.
    #[must_use]
    pub fn with_think_delay_ms(mut self, ms: u64) -> Self {
        self.think_delay_ms = ms;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Think delay as a `Duration`.
    #[must_use]
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Check that the config is usable.
    pub fn validate(&self) -> Result<()> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(ConfigError::ThinkDelayTooLong {
                actual: self.think_delay_ms,
                max: MAX_THINK_DELAY_MS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.think_delay_ms, 350);
        assert_eq!(config.think_delay(), Duration::from_millis(350));
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default().with_think_delay_ms(0).with_seed(7);
        assert_eq!(config.think_delay_ms, 0);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_validate_rejects_long_delay() {
        let config = EngineConfig::default().with_think_delay_ms(MAX_THINK_DELAY_MS + 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThinkDelayTooLong {
                actual: MAX_THINK_DELAY_MS + 1,
                max: MAX_THINK_DELAY_MS,
            })
        );
    }

    #[test]
    fn test_serialization_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.think_delay_ms, DEFAULT_THINK_DELAY_MS);

        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("pvp".parse::<Mode>().unwrap(), Mode::Pvp);
        assert_eq!(" PVE".parse::<Mode>().unwrap(), Mode::Pve);
        assert_eq!(Mode::Pve.to_string(), "pve");
        assert_eq!(
            "solo".parse::<Mode>(),
            Err(ParseError::Mode("solo".to_string()))
        );
    }

    #[test]
    fn test_mode_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Pvp).unwrap(), "\"pvp\"");
        let mode: Mode = serde_json::from_str("\"pve\"").unwrap();
        assert_eq!(mode, Mode::Pve);
    }
}
