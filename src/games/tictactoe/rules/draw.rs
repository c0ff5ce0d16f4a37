//! Fullness and tie detection for tic-tac-toe.

use super::super::BoardState;
use super::win::has_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// Full does not mean tied: the last move can fill the board and complete a
/// line at the same time.
#[instrument(skip(board))]
pub fn is_full(board: &BoardState) -> bool {
    board.marks().iter().all(|m| !m.is_empty())
}

/// A tie is a full board with no complete line.
#[instrument(skip(board))]
pub fn is_tie(board: &BoardState) -> bool {
    let full = is_full(board);
    let won = has_winner(board);
    full && !won
}
