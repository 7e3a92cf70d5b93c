//! Status line and render snapshot for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{Mode, Symbol, WinLine, CELL_COUNT};

/// What the status line should say.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No mode selected; nothing to play.
    SelectMode,
    /// Board cleared without clearing the mode.
    SelectModeOrRestart,
    /// Waiting for this symbol to move.
    Turn(Symbol),
    /// Computer move pending; human input is locked.
    ComputerThinking,
    /// Game over with a winner.
    Won(Symbol),
    /// Game over, board full.
    Draw,
}

impl Status {
    /// Check if the status describes a finished game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Status::Won(_) | Status::Draw)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::SelectMode => f.write_str("Select a game mode to start."),
            Status::SelectModeOrRestart => f.write_str("Select a game mode or restart."),
            Status::Turn(symbol) => write!(f, "Current player: {}", symbol),
            Status::ComputerThinking => f.write_str("Computer is thinking..."),
            Status::Won(symbol) => write!(f, "{} wins!", symbol),
            Status::Draw => f.write_str("It's a draw!"),
        }
    }
}

/// Everything a renderer needs, in one serializable value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cell contents, row-major.
    pub board: [Option<Symbol>; CELL_COUNT],

    /// Which cells accept a click right now.
    pub playable: [bool; CELL_COUNT],

    /// Structured status.
    pub status: Status,

    /// Rendered status line.
    pub status_line: String,

    pub current: Symbol,
    pub mode: Option<Mode>,
    pub player_symbol: Symbol,
    pub computer_symbol: Symbol,
    pub running: bool,
    pub locked: bool,

    /// Line to highlight after a win.
    pub winning_line: Option<WinLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        assert_eq!(Status::SelectMode.to_string(), "Select a game mode to start.");
        assert_eq!(
            Status::SelectModeOrRestart.to_string(),
            "Select a game mode or restart."
        );
        assert_eq!(Status::Turn(Symbol::O).to_string(), "Current player: O");
        assert_eq!(Status::ComputerThinking.to_string(), "Computer is thinking...");
        assert_eq!(Status::Won(Symbol::X).to_string(), "X wins!");
        assert_eq!(Status::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn test_is_game_over() {
        assert!(Status::Won(Symbol::O).is_game_over());
        assert!(Status::Draw.is_game_over());
        assert!(!Status::Turn(Symbol::X).is_game_over());
        assert!(!Status::ComputerThinking.is_game_over());
        assert!(!Status::SelectMode.is_game_over());
    }
}
