//! Game outcome and the evaluation that produces it.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Symbol, WinLine};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A symbol completed a line.
    Win {
        symbol: Symbol,
        line: WinLine,
    },
    /// Board filled with no complete line.
    Draw,
}

impl GameOutcome {
    /// Check if a symbol won.
    #[must_use]
    pub fn is_winner(&self, symbol: Symbol) -> bool {
        matches!(self, GameOutcome::Win { symbol: s, .. } if *s == symbol)
    }

    /// Winning symbol and line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<(Symbol, WinLine)> {
        match *self {
            GameOutcome::Win { symbol, line } => Some((symbol, line)),
            GameOutcome::Draw => None,
        }
    }
}

/// Decide whether the board position ends the game.
///
/// Returns `None` while the game continues. Win lines are checked before
/// fullness, so a ninth mark that completes a line is a win, not a draw.
#[must_use]
pub fn evaluate(board: &Board) -> Option<GameOutcome> {
    if let Some((symbol, line)) = board.winning_line() {
        return Some(GameOutcome::Win { symbol, line });
    }
    if board.is_full() {
        return Some(GameOutcome::Draw);
    }
    None
}
