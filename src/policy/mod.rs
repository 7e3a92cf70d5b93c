//! Computer move policies.
//!
//! Policies are trait-based so the engine can be driven by something other
//! than uniform random play (scripted moves in tests, for instance). The
//! shipped opponent is `UniformRandom`.

use crate::core::{Board, GameRng};

/// Policy for choosing the computer's cell.
pub trait MovePolicy: Send + Sync {
    /// Choose an empty cell index on `board`.
    ///
    /// Returns `None` if no cell is empty. Implementations must only return
    /// indices of empty cells.
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random policy.
///
/// Every empty cell is equally likely.
#[derive(Clone, Debug, Default)]
pub struct UniformRandom;

impl MovePolicy for UniformRandom {
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<usize> {
        let empty = board.empty_indices();
        rng.choose(&empty).copied()
    }
}
