//! Errors returned by the tic-tac-toe core.

use super::{Player, Position};

/// Error that can occur when reading, placing, or selecting a move.
///
/// None of these are fatal: the session is left exactly as it was before
/// the failing call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Cell index outside `1..=9`.
    #[display("Cell index {} is out of range (must be 1-9)", _0)]
    InvalidCellIndex(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The session reached a terminal status; reset to play again.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The named strategy has no implementation.
    #[display("The {} opponent is not supported yet", _0)]
    UnsupportedStrategy(&'static str),

    /// The current mode plays this mark automatically.
    #[display("{} is played automatically in this mode", _0)]
    MarkReservedForAi(Player),
}

impl std::error::Error for GameError {}
