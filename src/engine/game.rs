//! The game engine: board, turn sequencing, and the computer opponent.

use log::{debug, info, trace};

use crate::core::{
    Board, EngineConfig, GameRng, Mode, MoveRecord, Mover, Symbol, WinLine, CELL_COUNT,
};
use crate::policy::{MovePolicy, UniformRandom};
use crate::rules::{evaluate, GameOutcome};

use super::schedule::{FireOutcome, PlaceOutcome, RejectReason, ScheduledMove};
use super::status::{GameSnapshot, Status};

/// Where a game stands after a mark lands.
enum Progress {
    Finished(GameOutcome),
    Continued,
    Scheduled(ScheduledMove),
}

/// Tic-tac-toe engine owned by the caller.
///
/// All mutation goes through `start`, `restart`, `reset`,
/// `set_player_symbol`, `place`, and `fire`. Illegal input is ignored,
/// never an error.
///
/// ## Example
///
/// ```
/// use rust_ttt::{EngineConfig, GameEngine, Mode, Status, Symbol};
///
/// let mut engine = GameEngine::new(EngineConfig::default());
/// engine.start(Mode::Pvp, Symbol::X);
///
/// for index in [0, 3, 1, 4, 2] {
///     engine.place(index);
/// }
///
/// assert_eq!(engine.winner(), Some((Symbol::X, [0, 1, 2])));
/// assert_eq!(engine.status(), Status::Won(Symbol::X));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<P: MovePolicy = UniformRandom> {
    config: EngineConfig,
    policy: P,
    rng: GameRng,

    board: Board,
    current: Symbol,
    running: bool,
    locked: bool,
    mode: Option<Mode>,
    player_symbol: Symbol,
    computer_symbol: Symbol,

    status: Status,
    outcome: Option<GameOutcome>,
    history: Vec<MoveRecord>,

    /// Bumped on start and every issued ticket.
    epoch: u64,
    pending: Option<ScheduledMove>,
}

impl GameEngine<UniformRandom> {
    /// Create an engine with the uniform random computer opponent.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_policy(config, UniformRandom)
    }
}

impl Default for GameEngine<UniformRandom> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<P: MovePolicy> GameEngine<P> {
    /// Create an engine with a custom computer policy.
    ///
    /// The engine starts idle: no mode, human holds X, status asks for a
    /// mode.
    pub fn with_policy(config: EngineConfig, policy: P) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            policy,
            rng,
            board: Board::new(),
            current: Symbol::FIRST,
            running: false,
            locked: false,
            mode: None,
            player_symbol: Symbol::X,
            computer_symbol: Symbol::O,
            status: Status::SelectMode,
            outcome: None,
            history: Vec::new(),
            epoch: 0,
            pending: None,
        }
    }

    // === Lifecycle ===

    /// Start a new game.
    ///
    /// X always moves first. In pve with the computer holding X, the
    /// computer's opening move is scheduled right away and its ticket is
    /// returned.
    pub fn start(&mut self, mode: Mode, player_symbol: Symbol) -> Option<ScheduledMove> {
        self.mode = Some(mode);
        self.player_symbol = player_symbol;
        self.computer_symbol = player_symbol.opponent();
        self.clear_game();
        self.running = true;
        self.status = Status::Turn(self.current);

        info!(
            "Game started: mode={} player={} computer={}",
            mode, self.player_symbol, self.computer_symbol
        );

        if self.is_computer_turn() {
            return Some(self.schedule_computer_move());
        }
        None
    }

    /// Start again with the current mode and symbols.
    ///
    /// Without a selected mode this only clears the board.
    pub fn restart(&mut self) -> Option<ScheduledMove> {
        match self.mode {
            Some(mode) => self.start(mode, self.player_symbol),
            None => {
                self.reset(false);
                None
            }
        }
    }

    /// Stop the game and clear the board.
    ///
    /// With `clear_mode`, also forget the selected mode. A computer move
    /// still pending stays outstanding and is abandoned when it fires.
    pub fn reset(&mut self, clear_mode: bool) {
        self.clear_board();
        if clear_mode {
            self.mode = None;
        }
        self.status = if clear_mode {
            Status::SelectMode
        } else {
            Status::SelectModeOrRestart
        };
        debug!("Game reset (clear_mode={})", clear_mode);
    }

    /// Pick the human's symbol; the computer takes the other one.
    ///
    /// A pve game in progress restarts with the new symbols.
    pub fn set_player_symbol(&mut self, symbol: Symbol) -> Option<ScheduledMove> {
        self.player_symbol = symbol;
        self.computer_symbol = symbol.opponent();
        match self.mode {
            Some(Mode::Pve) => self.start(Mode::Pve, symbol),
            _ => None,
        }
    }

    // === Moves ===

    /// Mark `index` for the side to move.
    ///
    /// Ignored (returns `Rejected`) when no game is running, a computer move
    /// is pending, it is the computer's turn, or the cell is off the board or
    /// taken. A rejected call changes nothing.
    pub fn place(&mut self, index: usize) -> PlaceOutcome {
        if let Some(reason) = self.reject_reason(index) {
            trace!("Ignored move at {}: {:?}", index, reason);
            return PlaceOutcome::Rejected(reason);
        }

        self.mark(index, Mover::Human);
        match self.after_move() {
            Progress::Finished(outcome) => PlaceOutcome::Finished(outcome),
            Progress::Continued => PlaceOutcome::Continued,
            Progress::Scheduled(ticket) => PlaceOutcome::Scheduled(ticket),
        }
    }

    /// Play the computer move a ticket was issued for.
    ///
    /// Call once the ticket's delay has elapsed. Tickets from an earlier
    /// game, or already fired, are ignored. A ticket that outlived a reset
    /// is abandoned. If the policy picks an unavailable cell, the move falls
    /// back to a uniform random empty cell so the game can't stall.
    pub fn fire(&mut self, ticket: ScheduledMove) -> FireOutcome {
        if self.pending != Some(ticket) {
            trace!("Stale computer move ticket (epoch {})", ticket.epoch);
            return FireOutcome::Stale;
        }
        self.pending = None;
        self.locked = false;

        if !self.running {
            debug!("Computer move abandoned: game stopped");
            return FireOutcome::Abandoned;
        }
        if self.board.is_full() {
            debug!("Computer move abandoned: no empty cell");
            return FireOutcome::Abandoned;
        }

        let chosen = self
            .policy
            .choose(&self.board, &mut self.rng)
            .filter(|&index| self.board.is_empty_at(index));
        let Some(index) = chosen.or_else(|| {
            debug!("Policy chose no empty cell; falling back to uniform choice");
            UniformRandom.choose(&self.board, &mut self.rng)
        }) else {
            return FireOutcome::Abandoned;
        };

        self.current = self.computer_symbol;
        self.mark(index, Mover::Computer);
        match self.after_move() {
            Progress::Finished(outcome) => FireOutcome::Finished { index, outcome },
            // The human always follows the computer, so nothing new is scheduled.
            Progress::Continued | Progress::Scheduled(_) => FireOutcome::Continued { index },
        }
    }

    // === Queries ===

    /// Current status line.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol at a cell; `None` if empty or out of range.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Symbol> {
        self.board.get(index)
    }

    /// Whether a click on `index` would be considered right now.
    ///
    /// Mirrors the renderer's enabled state: running, unlocked, and empty.
    #[must_use]
    pub fn is_cell_playable(&self, index: usize) -> bool {
        self.running && !self.locked && self.board.is_empty_at(index)
    }

    /// Symbol to move.
    #[must_use]
    pub fn current_symbol(&self) -> Symbol {
        self.current
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True while a computer move is pending.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    #[must_use]
    pub fn player_symbol(&self) -> Symbol {
        self.player_symbol
    }

    #[must_use]
    pub fn computer_symbol(&self) -> Symbol {
        self.computer_symbol
    }

    /// How the last game ended, until the next start or reset.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Winning symbol and the line that won.
    #[must_use]
    pub fn winner(&self) -> Option<(Symbol, WinLine)> {
        self.outcome.and_then(|o| o.winner())
    }

    /// Check if the last game ended in a draw.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.outcome == Some(GameOutcome::Draw)
    }

    /// Moves of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Ticket for the computer move not yet fired.
    ///
    /// After a reset this is the ticket that will be abandoned.
    #[must_use]
    pub fn pending_move(&self) -> Option<ScheduledMove> {
        self.pending
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Capture everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let mut playable = [false; CELL_COUNT];
        for (index, slot) in playable.iter_mut().enumerate() {
            *slot = self.is_cell_playable(index);
        }

        GameSnapshot {
            board: *self.board.cells(),
            playable,
            status: self.status,
            status_line: self.status.to_string(),
            current: self.current,
            mode: self.mode,
            player_symbol: self.player_symbol,
            computer_symbol: self.computer_symbol,
            running: self.running,
            locked: self.locked,
            winning_line: self.winner().map(|(_, line)| line),
        }
    }

    // === Internals ===

    fn is_computer_turn(&self) -> bool {
        self.mode == Some(Mode::Pve) && self.current == self.computer_symbol
    }

    fn reject_reason(&self, index: usize) -> Option<RejectReason> {
        if !self.running {
            Some(RejectReason::NotRunning)
        } else if self.locked {
            Some(RejectReason::Locked)
        } else if self.is_computer_turn() {
            Some(RejectReason::ComputerTurn)
        } else if index >= CELL_COUNT {
            Some(RejectReason::OutOfRange)
        } else if !self.board.is_empty_at(index) {
            Some(RejectReason::Occupied)
        } else {
            None
        }
    }

    /// Wipe the board and invalidate any outstanding ticket.
    fn clear_game(&mut self) {
        self.clear_board();
        self.pending = None;
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn clear_board(&mut self) {
        self.board.clear();
        self.current = Symbol::FIRST;
        self.running = false;
        self.locked = false;
        self.outcome = None;
        self.history.clear();
    }

    fn mark(&mut self, index: usize, mover: Mover) {
        self.board.mark(index, self.current);
        let ply = self.history.len() as u8 + 1;
        self.history.push(MoveRecord::new(index, self.current, mover, ply));
        debug!("{:?} placed {} at {}", mover, self.current, index);
    }

    fn after_move(&mut self) -> Progress {
        if let Some(outcome) = evaluate(&self.board) {
            self.finish(outcome);
            return Progress::Finished(outcome);
        }

        self.current = self.current.opponent();
        self.status = Status::Turn(self.current);

        if self.is_computer_turn() {
            return Progress::Scheduled(self.schedule_computer_move());
        }
        Progress::Continued
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.running = false;
        self.locked = false;
        self.outcome = Some(outcome);
        self.status = match outcome {
            GameOutcome::Win { symbol, .. } => Status::Won(symbol),
            GameOutcome::Draw => Status::Draw,
        };
        info!("Game over: {}", self.status);
    }

    fn schedule_computer_move(&mut self) -> ScheduledMove {
        self.epoch = self.epoch.wrapping_add(1);
        let ticket = ScheduledMove {
            epoch: self.epoch,
            delay: self.config.think_delay(),
        };
        self.locked = true;
        self.pending = Some(ticket);
        self.status = Status::ComputerThinking;
        debug!(
            "Computer move scheduled (epoch {}, {:?})",
            ticket.epoch, ticket.delay
        );
        ticket
    }
}
