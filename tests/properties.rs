//! Property-based tests for win detection and ignored input.

use proptest::prelude::*;
use rust_ttt::{
    EngineConfig, GameEngine, Mode, PlaceOutcome, Symbol, CELL_COUNT, WIN_LINES,
};

/// Brute-force check: does any line hold three identical marks?
fn has_uniform_line(engine: &GameEngine) -> bool {
    WIN_LINES.iter().any(|line| {
        let first = engine.cell(line[0]);
        first.is_some() && line.iter().all(|&i| engine.cell(i) == first)
    })
}

proptest! {
    /// Playing a random permutation of cells in pvp, the winner is reported
    /// exactly when some line is uniformly marked.
    #[test]
    fn prop_winner_iff_uniform_line(order in Just((0..CELL_COUNT).collect::<Vec<_>>()).prop_shuffle()) {
        let mut engine = GameEngine::new(EngineConfig::default());
        engine.start(Mode::Pvp, Symbol::X);

        for index in order {
            if !engine.is_running() {
                break;
            }
            let outcome = engine.place(index);
            prop_assert!(outcome.is_accepted());
            prop_assert_eq!(engine.winner().is_some(), has_uniform_line(&engine));
        }

        prop_assert!(!engine.is_running());
        if engine.winner().is_none() {
            prop_assert_eq!(engine.history().len(), CELL_COUNT);
            prop_assert!(engine.is_draw());
        }
    }

    /// The reported line is really uniform and matches the winning symbol.
    #[test]
    fn prop_reported_line_is_uniform(order in Just((0..CELL_COUNT).collect::<Vec<_>>()).prop_shuffle()) {
        let mut engine = GameEngine::new(EngineConfig::default());
        engine.start(Mode::Pvp, Symbol::X);
        for index in order {
            engine.place(index);
        }

        if let Some((symbol, line)) = engine.winner() {
            for index in line {
                prop_assert_eq!(engine.cell(index), Some(symbol));
            }
            // The winner made the last move.
            prop_assert_eq!(engine.history().last().map(|m| m.symbol), Some(symbol));
        }
    }

    /// Occupied or out-of-range placements never change the board.
    #[test]
    fn prop_illegal_place_never_mutates(
        prefix in Just((0..CELL_COUNT).collect::<Vec<_>>()).prop_shuffle(),
        take in 1usize..5,
        target in 0usize..32,
    ) {
        let mut engine = GameEngine::new(EngineConfig::default());
        engine.start(Mode::Pvp, Symbol::X);
        for &index in prefix.iter().take(take) {
            engine.place(index);
        }

        let legal = target < CELL_COUNT && engine.board().is_empty_at(target) && engine.is_running();
        prop_assume!(!legal);

        let before = *engine.board();
        let current = engine.current_symbol();
        let outcome = engine.place(target);

        prop_assert!(matches!(outcome, PlaceOutcome::Rejected(_)));
        prop_assert_eq!(engine.board(), &before);
        prop_assert_eq!(engine.current_symbol(), current);
    }

    /// In pve, every fired ticket puts the computer's symbol on a cell that
    /// was empty, and never more than one cell per ticket.
    #[test]
    fn prop_pve_one_move_per_ticket(seed in any::<u64>(), human_first in any::<bool>()) {
        let human = if human_first { Symbol::X } else { Symbol::O };
        let mut engine = GameEngine::new(EngineConfig::default().with_seed(seed));
        let mut ticket = engine.start(Mode::Pve, human);

        while engine.is_running() {
            match ticket.take() {
                Some(t) => {
                    let before = engine.board().marked_count();
                    let placed = engine.fire(t).placed();
                    prop_assert!(placed.is_some());
                    prop_assert_eq!(engine.board().marked_count(), before + 1);
                    prop_assert_eq!(engine.cell(placed.unwrap_or(0)), Some(human.opponent()));
                }
                None => {
                    let index = engine.board().empty_indices()[0];
                    ticket = engine.place(index).scheduled();
                }
            }
        }
    }
}
