//! Tests for tic-tac-toe cell numbering.

use strictly_tictactoe::{GameError, Position};

#[test]
fn test_position_to_cell_index() {
    assert_eq!(Position::TopLeft.cell_index(), 1);
    assert_eq!(Position::Center.cell_index(), 5);
    assert_eq!(Position::BottomRight.cell_index(), 9);
}

#[test]
fn test_position_from_cell_index() {
    assert_eq!(Position::try_from(1), Ok(Position::TopLeft));
    assert_eq!(Position::try_from(5), Ok(Position::Center));
    assert_eq!(Position::try_from(9), Ok(Position::BottomRight));
    assert_eq!(Position::try_from(0), Err(GameError::InvalidCellIndex(0)));
    assert_eq!(Position::try_from(10), Err(GameError::InvalidCellIndex(10)));
}

#[test]
fn test_row_column_match_cell_numbering() {
    for pos in Position::ALL {
        let p = pos.cell_index() - 1;
        assert_eq!(pos.row(), p / 3);
        assert_eq!(pos.column(), p % 3);
    }
}

#[test]
fn test_display_includes_index_and_label() {
    assert_eq!(Position::MiddleRight.to_string(), "6 (Middle-right)");
}
