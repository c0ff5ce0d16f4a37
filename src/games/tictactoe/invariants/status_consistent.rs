//! Status consistency invariant: the stored status matches the board.

use super::Invariant;
use crate::games::tictactoe::rules;
use crate::GameSession;

/// Invariant: the session's status is what the rules say about its board.
pub struct StatusConsistentInvariant;

impl Invariant<GameSession> for StatusConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        rules::evaluate(session.board()) == session.status()
    }

    fn description() -> &'static str {
        "Status matches the evaluated board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, Player, Status};

    #[test]
    fn test_won_session_holds() {
        let mut session = GameSession::with_seed(Mode::HumanVsHuman, 0);
        for (cell, player) in [
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
            (5, Player::O),
            (3, Player::X),
        ] {
            session.execute_turn(cell, player).unwrap();
        }
        assert_eq!(session.status(), Status::Won(Player::X));
        assert!(StatusConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_stale_status_violates() {
        let mut session = GameSession::with_seed(Mode::HumanVsHuman, 0);
        session.execute_turn(1, Player::X).unwrap();
        session.corrupt_for_test(|_board, status| *status = Status::Tied);
        assert!(!StatusConsistentInvariant::holds(&session));
    }
}
