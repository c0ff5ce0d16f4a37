//! Executed placements.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A mark placed by a player, as recorded in session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who played.
    pub player: Player,
    /// Where.
    pub position: Position,
    /// Whether the automated opponent chose this cell.
    pub automated: bool,
}

impl Move {
    /// A move entered by a person.
    pub fn manual(player: Player, position: Position) -> Self {
        Self {
            player,
            position,
            automated: false,
        }
    }

    /// A move chosen by a strategy.
    pub fn automated(player: Player, position: Position) -> Self {
        Self {
            player,
            position,
            automated: true,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)?;
        if self.automated {
            f.write_str(" (auto)")?;
        }
        Ok(())
    }
}
