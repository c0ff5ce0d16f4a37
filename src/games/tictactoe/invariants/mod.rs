//! First-class invariants for tic-tac-toe sessions.
//!
//! Invariants are logical properties that must hold after every turn.
//! They are testable independently and are asserted in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod monotonic_board;
pub mod status_consistent;

pub use monotonic_board::MonotonicBoardInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (MonotonicBoardInvariant, StatusConsistentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSession, Mode, Player};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::with_seed(Mode::HumanVsHuman, 1);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut session = GameSession::with_seed(Mode::HumanVsRandomAi, 7);
        session.execute_turn(5, Player::X).unwrap();
        let next = session.empty_cells().next().unwrap();
        session.execute_turn(next, Player::X).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut session = GameSession::with_seed(Mode::HumanVsHuman, 1);
        session.execute_turn(1, Player::X).unwrap();
        session.corrupt_for_test(|board, _status| {
            board.clear();
            board.set(2, Player::O).unwrap();
            board.set(5, Player::O).unwrap();
            board.set(8, Player::O).unwrap();
        });

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
