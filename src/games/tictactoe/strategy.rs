//! Automated opponents.
//!
//! A strategy looks at a board and recommends a cell. It never mutates the
//! board and keeps no state between calls, so one instance can serve any
//! number of sessions. Randomness is supplied by the caller.

use super::{BoardState, GameError, Position};
use rand::seq::IteratorRandom;
use rand::RngCore;
use tracing::{debug, instrument};

/// Picks a move for the automated player.
pub trait Strategy: std::fmt::Debug + Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Recommends an empty cell, or `None` when the board is full.
    fn select_move(
        &self,
        board: &BoardState,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Position>, GameError>;
}

/// Uniformly random choice among empty cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    #[instrument(skip(self, board, rng))]
    fn select_move(
        &self,
        board: &BoardState,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Position>, GameError> {
        let choice = board.empty_positions().choose(rng);
        debug!(choice = ?choice, "Random strategy picked a cell");
        Ok(choice)
    }
}

/// Optimal play. Not implemented: every call reports
/// [`GameError::UnsupportedStrategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartStrategy;

impl Strategy for SmartStrategy {
    fn name(&self) -> &'static str {
        "smart"
    }

    #[instrument(skip(self, _board, _rng))]
    fn select_move(
        &self,
        _board: &BoardState,
        _rng: &mut dyn RngCore,
    ) -> Result<Option<Position>, GameError> {
        Err(GameError::UnsupportedStrategy(self.name()))
    }
}
