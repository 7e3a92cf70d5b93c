//! Real-clock driver for the computer's think delay.
//!
//! `GameEngine` never sleeps: it hands out `ScheduledMove` tickets. This
//! wrapper owns the clock. Every ticket the engine issues is spawned onto
//! the tokio runtime, slept for `ticket.delay`, and fired. Cancellation is
//! still the engine's epoch check, so timers from a game that was reset in
//! the meantime wake up and do nothing.
//!
//! All methods that may schedule a move must be called from inside a tokio
//! runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::core::{EngineConfig, Mode, Symbol};
use crate::engine::{FireOutcome, GameEngine, GameSnapshot, PlaceOutcome, ScheduledMove};
use crate::error::Result;
use crate::policy::{MovePolicy, UniformRandom};

/// Shared, timer-driven game handle.
pub struct TimedGame<P: MovePolicy = UniformRandom> {
    engine: Arc<Mutex<GameEngine<P>>>,
}

impl<P: MovePolicy> Clone for TimedGame<P> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl TimedGame<UniformRandom> {
    /// Create a driver around a fresh engine with the random opponent.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_policy(config, UniformRandom)
    }
}

impl<P: MovePolicy + 'static> TimedGame<P> {
    /// Create a driver with a custom computer policy.
    pub fn with_policy(config: EngineConfig, policy: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            engine: Arc::new(Mutex::new(GameEngine::with_policy(config, policy))),
        })
    }

    /// Start a game; see `GameEngine::start`.
    pub fn start(&self, mode: Mode, player_symbol: Symbol) -> Option<ScheduledMove> {
        let ticket = self.lock().start(mode, player_symbol);
        self.arm(ticket)
    }

    /// Restart with the current mode; see `GameEngine::restart`.
    pub fn restart(&self) -> Option<ScheduledMove> {
        let ticket = self.lock().restart();
        self.arm(ticket)
    }

    /// Change the human's symbol; see `GameEngine::set_player_symbol`.
    pub fn set_player_symbol(&self, symbol: Symbol) -> Option<ScheduledMove> {
        let ticket = self.lock().set_player_symbol(symbol);
        self.arm(ticket)
    }

    /// Stop and clear; any armed timer becomes a no-op.
    pub fn reset(&self, clear_mode: bool) {
        self.lock().reset(clear_mode);
    }

    /// Human move; arms the computer's reply when one is scheduled.
    pub fn place(&self, index: usize) -> PlaceOutcome {
        let outcome = self.lock().place(index);
        self.arm(outcome.scheduled());
        outcome
    }

    /// Render snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    /// Run a read-only query against the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&GameEngine<P>) -> R) -> R {
        f(&*self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, GameEngine<P>> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn arm(&self, ticket: Option<ScheduledMove>) -> Option<ScheduledMove> {
        let ticket = ticket?;
        let engine = Arc::clone(&self.engine);
        tokio::spawn(async move {
            tokio::time::sleep(ticket.delay).await;
            let outcome: FireOutcome = engine
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .fire(ticket);
            debug!("Timer fired (epoch {}): {:?}", ticket.epoch, outcome);
            outcome
        });
        Some(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;
    use crate::error::ConfigError;
    use std::time::Duration;

    fn delay() -> Duration {
        EngineConfig::default().think_delay()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = EngineConfig::default().with_think_delay_ms(60_000);
        assert!(matches!(
            TimedGame::new(config),
            Err(ConfigError::ThinkDelayTooLong { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_computer_replies_after_delay() {
        let game = TimedGame::new(EngineConfig::default()).unwrap();
        game.start(Mode::Pve, Symbol::X);

        assert!(game.place(4).scheduled().is_some());
        assert_eq!(game.snapshot().status, Status::ComputerThinking);

        tokio::time::sleep(delay() / 2).await;
        assert_eq!(game.with_engine(|e| e.board().marked_count()), 1);

        tokio::time::sleep(delay()).await;
        let snapshot = game.snapshot();
        assert_eq!(game.with_engine(|e| e.board().marked_count()), 2);
        assert!(!snapshot.locked);
        assert_eq!(snapshot.status, Status::Turn(Symbol::X));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_mid_delay_cancels_move() {
        let game = TimedGame::new(EngineConfig::default()).unwrap();
        assert!(game.start(Mode::Pve, Symbol::O).is_some());

        game.reset(false);
        tokio::time::sleep(delay() * 2).await;

        game.with_engine(|e| {
            assert_eq!(e.board().marked_count(), 0);
            assert!(!e.is_locked());
            assert_eq!(e.status(), Status::SelectModeOrRestart);
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_mid_delay_plays_once() {
        let game = TimedGame::new(EngineConfig::default()).unwrap();
        game.start(Mode::Pve, Symbol::O);
        tokio::time::sleep(delay() / 2).await;

        // Old timer still armed; only the new one may move.
        game.restart();
        tokio::time::sleep(delay() * 2).await;

        assert_eq!(game.with_engine(|e| e.board().marked_count()), 1);
    }
}
