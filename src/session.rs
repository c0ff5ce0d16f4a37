//! A single game of tic-tac-toe and its turn logic.

use crate::config::SessionConfig;
#[cfg(debug_assertions)]
use crate::games::tictactoe::invariants::{InvariantSet, SessionInvariants};
use crate::games::tictactoe::{
    rules, BoardState, GameError, Mark, Mode, Move, Player, Position, Status, TurnOutcome,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

/// State needed to undo a partially applied turn.
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    board: BoardState,
    status: Status,
    history_len: usize,
}

/// One game: a board, the mode that decides who plays `O`, and the status.
///
/// All mutation goes through [`execute_turn`](Self::execute_turn),
/// [`set_mode`](Self::set_mode) and [`reset`](Self::reset). A failed call
/// leaves the session exactly as it was.
///
/// The session has no internal locking. Callers sharing one across threads
/// must serialize access themselves.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: BoardState,
    mode: Mode,
    status: Status,
    history: Vec<Move>,
    rng: ChaCha8Rng,
}

/// Starts a session in `mode` with an entropy-seeded opponent.
pub fn new_session(mode: Mode) -> GameSession {
    GameSession::new(mode)
}

impl GameSession {
    /// Creates a session whose automated opponent draws from OS entropy.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self::with_rng(mode, ChaCha8Rng::from_entropy())
    }

    /// Creates a session with a reproducible automated opponent.
    #[instrument]
    pub fn with_seed(mode: Mode, seed: u64) -> Self {
        Self::with_rng(mode, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a session from loaded settings.
    #[instrument(skip(config), fields(mode = %config.mode(), seed = ?config.seed()))]
    pub fn from_config(config: &SessionConfig) -> Self {
        match config.seed() {
            Some(seed) => Self::with_seed(*config.mode(), *seed),
            None => Self::new(*config.mode()),
        }
    }

    fn with_rng(mode: Mode, rng: ChaCha8Rng) -> Self {
        info!(%mode, "Creating new game session");
        Self {
            board: BoardState::new(),
            mode,
            status: Status::InProgress,
            history: Vec::new(),
            rng,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Mark at a 1-based cell index.
    pub fn get(&self, cell: usize) -> Result<Mark, GameError> {
        self.board.get(cell)
    }

    /// Empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.board.empty_cells()
    }

    /// Moves played since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The automated reply from the most recent turn, if it made one.
    pub fn last_automated_move(&self) -> Option<Move> {
        self.history.last().copied().filter(|mov| mov.automated)
    }

    /// Clears the board and starts over in the same mode.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.status = Status::InProgress;
        info!("Session reset");
    }

    /// Switches the opponent type and starts a fresh game.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: Mode) {
        info!(to = %mode, "Changing mode");
        self.mode = mode;
        self.reset();
    }

    /// Plays `player` at a 1-based cell index.
    ///
    /// In automated modes, a successful human move that does not end the
    /// game is answered by the opponent within the same call, and the
    /// returned outcome reflects the board after that reply. If the reply
    /// fails, the human move is undone and the error is returned.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn execute_turn(&mut self, cell: usize, player: Player) -> Result<TurnOutcome, GameError> {
        if self.status.is_terminal() {
            warn!(status = ?self.status, "Move attempted after game over");
            return Err(GameError::GameAlreadyOver);
        }
        if !self.mode.accepts_manual(player) {
            warn!(%player, "Manual move for the automated mark rejected");
            return Err(GameError::MarkReservedForAi(player));
        }

        let checkpoint = self.checkpoint();
        let pos = Position::from_cell_index(cell).inspect_err(|e| warn!(error = %e, "Invalid move"))?;
        self.apply(Move::manual(player, pos))?;

        if let Err(e) = self.reply_to(player) {
            warn!(error = %e, "Automated reply failed, undoing turn");
            self.restore(checkpoint);
            return Err(e);
        }

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(self.status.into())
    }

    /// Places a move through the shared validation path and re-evaluates
    /// the status.
    fn apply(&mut self, mov: Move) -> Result<(), GameError> {
        if self.status.is_terminal() {
            warn!(status = ?self.status, "Move attempted after game over");
            return Err(GameError::GameAlreadyOver);
        }

        self.board
            .place(mov.position, mov.player)
            .inspect_err(|e| warn!(error = %e, "Invalid move"))?;
        self.history.push(mov);
        debug!(%mov, "Move placed");

        self.status = rules::evaluate(&self.board);
        match self.status {
            Status::InProgress => {}
            Status::Won(winner) => info!(%winner, "Game won"),
            Status::Tied => info!("Game tied"),
        }
        Ok(())
    }

    /// Lets the automated opponent answer `player`'s move, if the mode has
    /// one and the game is still open.
    fn reply_to(&mut self, player: Player) -> Result<(), GameError> {
        let (Some(ai), Some(strategy)) = (self.mode.ai_player(), self.mode.strategy()) else {
            return Ok(());
        };
        if ai == player || self.status.is_terminal() {
            return Ok(());
        }

        match strategy.select_move(&self.board, &mut self.rng)? {
            Some(pos) => {
                debug!(strategy = strategy.name(), %pos, "Automated opponent chose a cell");
                self.apply(Move::automated(ai, pos))
            }
            None => Ok(()),
        }
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            board: self.board,
            status: self.status,
            history_len: self.history.len(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.board = checkpoint.board;
        self.status = checkpoint.status;
        self.history.truncate(checkpoint.history_len);
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        if let Err(violations) = SessionInvariants::check_all(self) {
            for violation in &violations {
                tracing::error!(%violation, "Session invariant violated");
            }
            panic!("Session invariants violated: {:?}", violations);
        }
    }

    #[cfg(test)]
    pub(crate) fn corrupt_for_test(&mut self, f: impl FnOnce(&mut BoardState, &mut Status)) {
        f(&mut self.board, &mut self.status);
    }
}
