//! Post-move evaluation.
//!
//! After every mark the engine asks `evaluate` whether the game is over:
//! - A complete win line ends it with that line's symbol
//! - A full board without a win line ends it in a draw
//!
//! Evaluation is a pure function of the board.

pub mod outcome;

pub use outcome::{evaluate, GameOutcome};
