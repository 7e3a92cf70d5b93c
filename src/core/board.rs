//! The 3x3 board and its fixed win lines.
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::symbol::Symbol;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Three cell indices that win when uniformly marked.
pub type WinLine = [usize; 3];

/// All win lines, scanned in this order: rows, columns, diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Indices of empty cells. Never holds more than nine entries.
pub type EmptyCells = SmallVec<[usize; CELL_COUNT]>;

/// Board contents: each cell is empty or holds a symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Symbol>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cell contents.
    ///
    /// ```
    /// use rust_ttt::core::{Board, Symbol};
    ///
    /// let x = Some(Symbol::X);
    /// let board = Board::from_cells([x, x, x, None, None, None, None, None, None]);
    /// assert_eq!(board.winning_line(), Some((Symbol::X, [0, 1, 2])));
    /// ```
    #[must_use]
    pub const fn from_cells(cells: [Option<Symbol>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get the symbol at a cell. Out-of-range indices read as empty.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.cells.get(index).copied().flatten()
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Symbol>; CELL_COUNT] {
        &self.cells
    }

    /// Check whether `index` is on the board and unmarked.
    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Mark an empty cell.
    ///
    /// Returns `false` and leaves the board untouched if the index is out
    /// of range or the cell is already marked.
    pub fn mark(&mut self, index: usize, symbol: Symbol) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_none() => {
                *cell = Some(symbol);
                true
            }
            _ => false,
        }
    }

    /// Clear every cell.
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// Indices of empty cells, ascending.
    #[must_use]
    pub fn empty_indices(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of marked cells.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// First uniformly marked line in `WIN_LINES` order, with its symbol.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Symbol, WinLine)> {
        WIN_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let symbol = self.cells[a]?;
            (self.cells[b] == Some(symbol) && self.cells[c] == Some(symbol)).then_some((symbol, line))
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * 3 + col] {
                    Some(symbol) => write!(f, " {} ", symbol)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
