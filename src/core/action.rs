//! Move records for history tracking.
//!
//! Every mark that lands on the board is recorded in order. The history is
//! cleared whenever the board is.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Who made a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mover {
    /// A human clicking a cell.
    Human,
    /// The computer opponent, after its think delay.
    Computer,
}

/// A recorded move.
///
/// Used for:
/// - Replay/debugging
/// - Rendering the last move in the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Cell index (0-8).
    pub index: usize,

    /// The symbol placed.
    pub symbol: Symbol,

    /// Who placed it.
    pub mover: Mover,

    /// Position in the game, starting at 1.
    pub ply: u8,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(index: usize, symbol: Symbol, mover: Mover, ply: u8) -> Self {
        Self {
            index,
            symbol,
            mover,
            ply,
        }
    }

    /// Row of the move (0-2).
    #[must_use]
    pub fn row(&self) -> usize {
        self.index / 3
    }

    /// Column of the move (0-2).
    #[must_use]
    pub fn col(&self) -> usize {
        self.index % 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col() {
        let record = MoveRecord::new(5, Symbol::O, Mover::Computer, 2);
        assert_eq!(record.row(), 1);
        assert_eq!(record.col(), 2);
    }

    #[test]
    fn test_serde() {
        let record = MoveRecord::new(0, Symbol::X, Mover::Human, 1);
        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
