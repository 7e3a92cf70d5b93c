//! Deferred computer moves and per-operation outcomes.
//!
//! When it becomes the computer's turn the engine locks and hands out a
//! `ScheduledMove` ticket instead of sleeping. Whoever owns the clock waits
//! `ticket.delay` and passes the ticket back to `GameEngine::fire`.
//!
//! Each ticket carries the epoch it was issued under. Starting, resetting,
//! or issuing a newer ticket moves the epoch on, so a ticket that outlived
//! its game fires as `FireOutcome::Stale` and touches nothing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::rules::GameOutcome;

/// Ticket for one pending computer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledMove {
    /// Engine epoch the ticket belongs to.
    pub epoch: u64,

    /// How long to wait before firing.
    pub delay: Duration,
}

/// Why `place` ignored a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// No game in progress.
    NotRunning,
    /// A computer move is pending.
    Locked,
    /// In pve, the side to move belongs to the computer.
    ComputerTurn,
    /// Index is not 0-8.
    OutOfRange,
    /// Cell already holds a symbol.
    Occupied,
}

/// Result of `GameEngine::place`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// Nothing changed.
    Rejected(RejectReason),
    /// Mark placed; the other human moves next.
    Continued,
    /// Mark placed; the computer moves after the ticket's delay.
    Scheduled(ScheduledMove),
    /// Mark placed and the game ended.
    Finished(GameOutcome),
}

impl PlaceOutcome {
    /// Check if a mark landed on the board.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, PlaceOutcome::Rejected(_))
    }

    /// The computer move this placement scheduled, if any.
    #[must_use]
    pub fn scheduled(&self) -> Option<ScheduledMove> {
        match *self {
            PlaceOutcome::Scheduled(ticket) => Some(ticket),
            _ => None,
        }
    }
}

/// Result of `GameEngine::fire`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireOutcome {
    /// Ticket no longer matches the engine; nothing changed.
    Stale,
    /// Ticket was live but the game had stopped or no cell was empty.
    /// The lock is released and no cell is marked.
    Abandoned,
    /// Computer marked `index`; the human moves next.
    Continued { index: usize },
    /// Computer marked `index` and the game ended.
    Finished { index: usize, outcome: GameOutcome },
}

impl FireOutcome {
    /// Cell the computer marked, if it moved.
    #[must_use]
    pub fn placed(&self) -> Option<usize> {
        match *self {
            FireOutcome::Continued { index } | FireOutcome::Finished { index, .. } => Some(index),
            FireOutcome::Stale | FireOutcome::Abandoned => None,
        }
    }
}
