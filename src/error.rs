//! Error types for the edges of the engine.
//!
//! Game operations never fail: illegal input is ignored and reported
//! through outcome enums. Errors only arise when turning strings into
//! symbols or modes, and when validating configuration.

use thiserror::Error;

/// Errors from parsing presentation-layer values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown symbol: {0:?} (expected \"X\" or \"O\")")]
    Symbol(String),

    #[error("Unknown game mode: {0:?} (expected \"pvp\" or \"pve\")")]
    Mode(String),
}

/// Errors from validating an `EngineConfig`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Think delay of {actual}ms exceeds the {max}ms limit")]
    ThinkDelayTooLong { actual: u64, max: u64 },
}

/// Convenience Result type for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigError>;
