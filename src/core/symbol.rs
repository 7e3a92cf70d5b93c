//! Player symbols.
//!
//! Tic-tac-toe has exactly two marks. `X` always moves first, regardless
//! of mode or which mark the human picked.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// A mark placed on a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// The symbol that opens every game.
    pub const FIRST: Symbol = Symbol::X;

    /// Get the other symbol.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Single-character label used by status lines and board rendering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Symbol::X),
            "O" | "o" => Ok(Symbol::O),
            other => Err(ParseError::Symbol(other.to_string())),
        }
    }
}
