//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::games::tictactoe::BoardState;
use crate::GameSession;

/// Invariant: cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an
/// occupied cell, and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut reconstructed = BoardState::new();

        for mov in session.history() {
            if reconstructed.place(mov.position, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
