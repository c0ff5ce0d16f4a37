//! Named board positions and the 1-based cell numbering used by callers.

use super::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board.
///
/// Callers address cells by index 1-9 in row-major order; this enum is the
/// validated form of such an index. Internally a position `p = index - 1`
/// sits at row `p / 3` and column `p % 3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// All 9 positions, in ascending cell index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Validates a 1-based cell index.
    #[instrument]
    pub fn from_cell_index(index: usize) -> Result<Self, GameError> {
        index
            .checked_sub(1)
            .and_then(|offset| Self::ALL.get(offset).copied())
            .ok_or(GameError::InvalidCellIndex(index))
    }

    /// The 1-based cell index (1-9).
    pub fn cell_index(self) -> usize {
        self.offset() + 1
    }

    /// Zero-based storage offset (0-8).
    pub(crate) fn offset(self) -> usize {
        self as usize
    }

    /// Row, counted from the top (0-2).
    pub fn row(self) -> usize {
        self.offset() / 3
    }

    /// Column, counted from the left (0-2).
    pub fn column(self) -> usize {
        self.offset() % 3
    }

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a cell index (1-9) or a label.
    ///
    /// Labels match case-insensitively and may omit the hyphen
    /// ("top left", "topleft", "Top-left").
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_cell_index(num).ok();
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        <Position as strum::IntoEnumIterator>::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl TryFrom<usize> for Position {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_cell_index(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.cell_index(), self.label())
    }
}
