//! # rust-ttt
//!
//! A tic-tac-toe engine for two humans (pvp) or a human against a
//! random-move computer (pve).
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: `GameEngine` is a plain value. No globals;
//!    the presentation layer owns the engine and polls it for rendering.
//!
//! 2. **Illegal Input Is Ignored**: Moves that can't be played change
//!    nothing. The outcome enums say why, but nothing returns an error.
//!
//! 3. **Explicit Timers**: The computer's think delay is a `ScheduledMove`
//!    ticket stamped with an epoch. Starting a new game invalidates every
//!    outstanding ticket, and a ticket that fires into a stopped game is
//!    abandoned, so stale timers can't mark a board.
//!
//! ## Modules
//!
//! - `core`: Symbols, board and win lines, mode, config, move records, RNG
//! - `rules`: Post-move evaluation (win, draw, or continue)
//! - `policy`: Computer move policies
//! - `engine`: `GameEngine`, status lines, scheduled moves
//! - `timer`: tokio driver that fires scheduled moves (feature `timer`)

pub mod core;
pub mod error;
pub mod rules;
pub mod policy;
pub mod engine;

#[cfg(feature = "timer")]
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    Board, WinLine, WIN_LINES, CELL_COUNT,
    Symbol, Mode, EngineConfig,
    MoveRecord, Mover,
    GameRng,
};

pub use crate::error::{ConfigError, ParseError};

pub use crate::rules::{evaluate, GameOutcome};

pub use crate::policy::{MovePolicy, UniformRandom};

pub use crate::engine::{
    GameEngine, GameSnapshot, Status,
    PlaceOutcome, FireOutcome, RejectReason, ScheduledMove,
};

#[cfg(feature = "timer")]
pub use crate::timer::TimedGame;
