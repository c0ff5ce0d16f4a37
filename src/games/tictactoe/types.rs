//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player who can place a mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Player {
    /// Player X (the human in automated modes).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by X.
    X,
    /// Occupied by O.
    O,
}

impl Mark {
    /// Returns the player occupying the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// True for `Mark::Empty`.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.player() {
            Some(player) => write!(f, "{}", player),
            None => Ok(()),
        }
    }
}

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still accepted.
    InProgress,
    /// A line was completed by this player.
    Won(Player),
    /// The board filled up without a completed line.
    Tied,
}

impl Status {
    /// True once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Result of a successful turn, after any automated reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The game goes on.
    Continued,
    /// The game ended with a winner.
    Won(Player),
    /// The game ended in a tie.
    Tied,
}

impl From<Status> for TurnOutcome {
    fn from(status: Status) -> Self {
        match status {
            Status::InProgress => TurnOutcome::Continued,
            Status::Won(player) => TurnOutcome::Won(player),
            Status::Tied => TurnOutcome::Tied,
        }
    }
}
