//! The 3x3 grid.

use super::{rules, GameError, Mark, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Cells only go from `Empty` to occupied through the public API; the
/// only way back is [`BoardState::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardState {
    /// Marks in row-major order, cell 1 first.
    cells: [Mark; 9],
}

impl BoardState {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets every cell back to `Empty`.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; 9];
    }

    /// Places `player`'s mark at a 1-based cell index.
    ///
    /// Returns the validated position on success. The board is untouched
    /// on failure.
    #[instrument(skip(self))]
    pub fn set(&mut self, cell: usize, player: Player) -> Result<Position, GameError> {
        let pos = Position::from_cell_index(cell)?;
        self.place(pos, player)?;
        Ok(pos)
    }

    /// Places `player`'s mark at a position that must be empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), GameError> {
        let slot = &mut self.cells[pos.offset()];
        if !slot.is_empty() {
            return Err(GameError::CellOccupied(pos));
        }
        *slot = player.into();
        Ok(())
    }

    /// Reads the mark at a 1-based cell index.
    pub fn get(&self, cell: usize) -> Result<Mark, GameError> {
        Ok(self.mark_at(Position::from_cell_index(cell)?))
    }

    /// Reads the mark at a position.
    pub fn mark_at(&self, pos: Position) -> Mark {
        self.cells[pos.offset()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.mark_at(pos).is_empty()
    }

    /// Empty positions in ascending cell order.
    ///
    /// The iterator is `Clone`, so it can be restarted.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + Clone + '_ {
        Position::ALL.into_iter().filter(move |pos| self.is_empty(*pos))
    }

    /// 1-based indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.empty_positions().map(Position::cell_index)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True iff any of the eight lines is complete.
    pub fn has_winner(&self) -> bool {
        rules::has_winner(self)
    }

    /// All cells in row-major order.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their cell index so players know what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.mark_at(pos).player() {
                Some(player) => player.to_string(),
                None => pos.cell_index().to_string(),
            };
            result.push_str(&symbol);
            match (pos.row(), pos.column()) {
                (2, 2) => {}
                (_, 2) => result.push_str("\n-+-+-\n"),
                _ => result.push('|'),
            }
        }
        result
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
