//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`BoardState`]. Rules are kept apart from board
//! storage so the session and the invariants judge a board the same way.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{has_winner, winner, winning_line, Line, LINES};

use super::{BoardState, Status};
use tracing::instrument;

/// Classifies a board.
///
/// Winner and fullness are both computed on every call, so a move that fills
/// the board and completes a line is reported as a win, never a tie.
#[instrument(skip(board))]
pub fn evaluate(board: &BoardState) -> Status {
    let winner = winner(board);
    let full = is_full(board);
    match (winner, full) {
        (Some(player), _) => Status::Won(player),
        (None, true) => Status::Tied,
        (None, false) => Status::InProgress,
    }
}
