//! Tests for board coordinates and index mapping.

use gomoku_core::{Board, BoardConfig, Game, Position};

fn standard_board() -> Board {
    Game::new(BoardConfig::default())
        .expect("valid config")
        .board()
        .clone()
}

#[test]
fn test_position_to_index_is_row_major() {
    assert_eq!(Position::new(0, 0).to_index(15), 0);
    assert_eq!(Position::new(0, 14).to_index(15), 14);
    assert_eq!(Position::new(1, 0).to_index(15), 15);
    assert_eq!(Position::new(7, 0).to_index(15), 105);
    assert_eq!(Position::new(7, 7).to_index(15), 112);
    assert_eq!(Position::new(14, 14).to_index(15), 224);
}

#[test]
fn test_position_from_index_inverts_to_index() {
    for index in [0, 1, 14, 15, 104, 105, 112, 224] {
        let position = Position::from_index(index, 15);
        assert_eq!(position.to_index(15), index);
    }
    assert_eq!(Position::from_index(112, 15), Position::new(7, 7));
}

#[test]
fn test_board_bounds_position_lookups() {
    let board = standard_board();

    assert_eq!(board.position_of(224), Some(Position::new(14, 14)));
    assert_eq!(board.position_of(225), None);

    assert_eq!(board.index_of(Position::new(14, 14)), Some(224));
    assert_eq!(board.index_of(Position::new(15, 0)), None);
    assert_eq!(board.index_of(Position::new(0, 15)), None);
}

#[test]
fn test_narrow_board_mapping() {
    let board = Game::new(BoardConfig::new(3, 7, 3))
        .expect("valid config")
        .board()
        .clone();

    assert_eq!(board.width(), 3);
    assert_eq!(board.height(), 7);
    assert_eq!(board.cell_count(), 21);
    assert_eq!(board.position_of(5), Some(Position::new(1, 2)));
    assert_eq!(board.index_of(Position::new(6, 0)), Some(18));
}

#[test]
fn test_position_displays_as_pair() {
    assert_eq!(Position::new(7, 3).to_string(), "(7, 3)");
}
