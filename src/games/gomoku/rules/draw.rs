//! Draw detection for gomoku.

use tracing::instrument;

use super::super::types::{Board, Cell};

/// Checks if every cell on the board is occupied.
///
/// A full board with no winning run means the game is drawn.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::types::Player;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3, 3);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3, 3);
        board.set(4, Cell::Stone(Player::One));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 2);
        for index in 0..4 {
            let player = if index % 2 == 0 {
                Player::One
            } else {
                Player::Two
            };
            board.set(index, Cell::Stone(player));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_all_but_one_not_full() {
        let mut board = Board::new(2, 2);
        for index in 0..3 {
            board.set(index, Cell::Stone(Player::One));
        }
        assert!(!is_full(&board));
    }
}
