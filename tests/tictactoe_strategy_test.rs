//! Tests for automated opponents.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use strictly_tictactoe::{BoardState, GameError, Player, Position, RandomStrategy, SmartStrategy, Strategy};

fn board_with(cells: &[usize]) -> BoardState {
    let mut board = BoardState::new();
    for (i, &cell) in cells.iter().enumerate() {
        let player = if i % 2 == 0 { Player::X } else { Player::O };
        board.set(cell, player).unwrap();
    }
    board
}

#[test]
fn test_random_picks_only_empty_cells() {
    let board = board_with(&[1, 2, 5, 9]);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let mut seen = HashSet::new();
    for _ in 0..500 {
        let pos = RandomStrategy
            .select_move(&board, &mut rng)
            .unwrap()
            .expect("board has empty cells");
        assert!(board.is_empty(pos), "{} is occupied", pos);
        seen.insert(pos.cell_index());
    }

    let expected: HashSet<_> = board.empty_cells().collect();
    assert_eq!(seen, expected, "every empty cell should come up");
}

#[test]
fn test_random_single_empty_cell() {
    let board = board_with(&[1, 2, 3, 5, 4, 6, 8, 7]);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        RandomStrategy.select_move(&board, &mut rng),
        Ok(Some(Position::BottomRight))
    );
}

#[test]
fn test_random_full_board_returns_none() {
    let board = board_with(&[1, 2, 3, 5, 4, 6, 8, 7, 9]);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(RandomStrategy.select_move(&board, &mut rng), Ok(None));
}

#[test]
fn test_random_does_not_touch_board() {
    let board = board_with(&[5]);
    let before = board;
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    RandomStrategy.select_move(&board, &mut rng).unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_smart_is_unsupported() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for board in [BoardState::new(), board_with(&[1, 5]), board_with(&[1, 2, 3, 5, 4, 6, 8, 7, 9])] {
        assert_eq!(
            SmartStrategy.select_move(&board, &mut rng),
            Err(GameError::UnsupportedStrategy("smart"))
        );
    }
}

#[test]
fn test_strategies_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RandomStrategy>();
    assert_send_sync::<SmartStrategy>();
    assert_send_sync::<&'static dyn Strategy>();
}
