//! Game engine: turn sequencing, status, and deferred computer moves.
//!
//! - `GameEngine`: owns the board and all turn state
//! - `Status` / `GameSnapshot`: what the presentation layer renders
//! - `ScheduledMove`: ticket for a pending computer move

pub mod game;
pub mod schedule;
pub mod status;

pub use game::GameEngine;
pub use schedule::{FireOutcome, PlaceOutcome, RejectReason, ScheduledMove};
pub use status::{GameSnapshot, Status};
