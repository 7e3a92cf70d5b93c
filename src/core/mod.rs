//! Core engine types: symbols, board, mode, configuration, moves, RNG.
//!
//! These carry no turn sequencing of their own; `GameEngine` drives them.

pub mod symbol;
pub mod board;
pub mod config;
pub mod action;
pub mod rng;

pub use symbol::Symbol;
pub use board::{Board, EmptyCells, WinLine, CELL_COUNT, WIN_LINES};
pub use config::{EngineConfig, Mode, DEFAULT_THINK_DELAY_MS, MAX_THINK_DELAY_MS};
pub use action::{MoveRecord, Mover};
pub use rng::GameRng;
