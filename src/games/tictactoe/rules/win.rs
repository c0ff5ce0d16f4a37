//! Win detection logic for tic-tac-toe.

use super::super::{BoardState, Player, Position};
use tracing::instrument;

/// Three cells that win when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions, in cell order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The player holding all three cells, if any.
    pub fn owner(&self, board: &BoardState) -> Option<Player> {
        let [a, b, c] = self.0;
        let mark = board.mark_at(a);
        if mark == board.mark_at(b) && mark == board.mark_at(c) {
            mark.player()
        } else {
            None
        }
    }

    /// True when one player holds the whole line.
    pub fn is_complete(&self, board: &BoardState) -> bool {
        self.owner(board).is_some()
    }
}

/// Every winning line: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    Line([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    Line([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    Line([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    Line([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// First complete line in table order.
#[instrument(skip(board))]
pub fn winning_line(board: &BoardState) -> Option<Line> {
    LINES.into_iter().find(|line| line.is_complete(board))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn winner(board: &BoardState) -> Option<Player> {
    LINES.iter().find_map(|line| line.owner(board))
}

/// True iff any line is complete.
pub fn has_winner(board: &BoardState) -> bool {
    winner(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, Player)]) -> BoardState {
        let mut board = BoardState::new();
        for &(cell, player) in cells {
            board.set(cell, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = BoardState::new();
        assert_eq!(winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_line_wins_alone() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let mut board = BoardState::new();
                for pos in line.positions() {
                    board.place(pos, player).unwrap();
                }
                assert_eq!(winner(&board), Some(player), "line {:?}", line);
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(1, Player::X), (2, Player::X), (3, Player::O)]);
        assert!(!has_winner(&board));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(7, Player::O), (5, Player::O)]);
        assert_eq!(winner(&board), None);
    }
}
