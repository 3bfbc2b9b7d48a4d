//! Win detection for gomoku.
//!
//! A move can only complete a run through the cell it was played on, so
//! detection scans outward from the last move along each axis instead of
//! sweeping the whole board.

use tracing::instrument;

use super::super::position::Position;
use super::super::types::{Board, Cell, Player};

/// One of the four axes a winning run can lie on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Axis {
    /// Left to right within a row.
    Horizontal,
    /// Top to bottom within a column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Bottom-left to top-right.
    DiagonalUp,
}

impl Axis {
    /// Step in the ascending-index direction as a `(row, col)` delta.
    fn delta(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalDown => (1, 1),
            Self::DiagonalUp => (1, -1),
        }
    }
}

/// A completed run of stones long enough to win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningRun {
    /// Owner of every stone in the run.
    pub player: Player,
    /// Cell indices of the run in ascending order.
    pub line: Vec<usize>,
}

/// Looks for a run of at least `n_in_row` stones through `last_index`.
///
/// Axes are tried in declaration order and the first qualifying run is
/// returned. The run covers the whole contiguous stretch of the mover's
/// stones on that axis, so it can be longer than `n_in_row`, and it
/// always contains `last_index`.
///
/// Returns `None` when `last_index` is out of range or the cell is
/// empty.
#[instrument(skip(board))]
pub fn winning_run(board: &Board, last_index: usize, n_in_row: usize) -> Option<WinningRun> {
    let anchor = board.position_of(last_index)?;
    let Cell::Stone(player) = board.get(last_index)? else {
        return None;
    };

    for axis in <Axis as strum::IntoEnumIterator>::iter() {
        // Rewind to the first stone of the contiguous run on this axis.
        let mut start = anchor;
        while let Some(prev) = step(board, start, axis, -1)
            && has_stone(board, prev, player)
        {
            start = prev;
        }

        // Walk forward over the run, collecting indices in ascending order.
        let mut line = Vec::new();
        let mut cursor = Some(start);
        while let Some(pos) = cursor
            && let Some(index) = board.index_of(pos)
            && board.get(index) == Some(Cell::Stone(player))
        {
            line.push(index);
            cursor = step(board, pos, axis, 1);
        }

        if line.len() >= n_in_row {
            return Some(WinningRun { player, line });
        }
    }

    None
}

/// Moves one cell along `axis`, forward for `sign` 1 and backward for -1.
///
/// Returns `None` when the step leaves the board.
fn step(board: &Board, from: Position, axis: Axis, sign: isize) -> Option<Position> {
    let (row_delta, col_delta) = axis.delta();
    let row = from.row.checked_add_signed(row_delta * sign)?;
    let col = from.col.checked_add_signed(col_delta * sign)?;
    (row < board.height() && col < board.width()).then(|| Position::new(row, col))
}

/// True when `pos` is on the board and holds a stone of `player`.
fn has_stone(board: &Board, pos: Position, player: Player) -> bool {
    board.index_of(pos).and_then(|index| board.get(index)) == Some(Cell::Stone(player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, indices: &[usize], player: Player) {
        for &index in indices {
            board.set(index, Cell::Stone(player));
        }
    }

    #[test]
    fn test_empty_board_no_run() {
        let board = Board::new(15, 15);
        assert_eq!(winning_run(&board, 112, 5), None);
    }

    #[test]
    fn test_horizontal_run_found_from_each_stone() {
        let mut board = Board::new(15, 15);
        place(&mut board, &[105, 106, 107, 108, 109], Player::One);
        for last in [105, 107, 109] {
            let run = winning_run(&board, last, 5).unwrap();
            assert_eq!(run.player, Player::One);
            assert_eq!(run.line, vec![105, 106, 107, 108, 109]);
        }
    }

    #[test]
    fn test_vertical_run() {
        let mut board = Board::new(15, 15);
        // Column 3, rows 2 through 6.
        place(&mut board, &[33, 48, 63, 78, 93], Player::Two);
        let run = winning_run(&board, 63, 5).unwrap();
        assert_eq!(run.player, Player::Two);
        assert_eq!(run.line, vec![33, 48, 63, 78, 93]);
    }

    #[test]
    fn test_diagonal_down_run() {
        let mut board = Board::new(15, 15);
        // (2,2) through (6,6), stepping one row and one column at a time.
        place(&mut board, &[32, 48, 64, 80, 96], Player::One);
        let run = winning_run(&board, 96, 5).unwrap();
        assert_eq!(run.line, vec![32, 48, 64, 80, 96]);
    }

    #[test]
    fn test_diagonal_up_run() {
        let mut board = Board::new(15, 15);
        // (2,6) through (6,2): rows descend as columns climb.
        place(&mut board, &[36, 50, 64, 78, 92], Player::One);
        let run = winning_run(&board, 36, 5).unwrap();
        assert_eq!(run.line, vec![36, 50, 64, 78, 92]);
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = Board::new(15, 15);
        place(&mut board, &[105, 106, 108, 109, 110], Player::One);
        assert_eq!(winning_run(&board, 110, 5), None);
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = Board::new(15, 15);
        place(&mut board, &[105, 106, 107, 108], Player::One);
        place(&mut board, &[109], Player::Two);
        assert_eq!(winning_run(&board, 108, 5), None);
    }

    #[test]
    fn test_run_longer_than_needed_is_reported_whole() {
        let mut board = Board::new(15, 15);
        place(&mut board, &[105, 106, 107, 108, 109, 110], Player::One);
        let run = winning_run(&board, 107, 5).unwrap();
        assert_eq!(run.line, vec![105, 106, 107, 108, 109, 110]);
    }

    #[test]
    fn test_row_wrap_does_not_join_runs() {
        let mut board = Board::new(15, 15);
        // Indices 102..=106 are contiguous, but the row breaks after 104.
        place(&mut board, &[102, 103, 104, 105, 106], Player::One);
        assert_eq!(winning_run(&board, 104, 5), None);
        assert_eq!(winning_run(&board, 105, 5), None);
    }

    #[test]
    fn test_run_against_board_edge() {
        let mut board = Board::new(15, 15);
        place(&mut board, &[0, 1, 2, 3, 4], Player::Two);
        let run = winning_run(&board, 0, 5).unwrap();
        assert_eq!(run.line, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_shorter_requirement_on_small_board() {
        let mut board = Board::new(3, 3);
        place(&mut board, &[0, 4, 8], Player::One);
        let run = winning_run(&board, 4, 3).unwrap();
        assert_eq!(run.line, vec![0, 4, 8]);
    }

    #[test]
    fn test_out_of_range_index_is_none() {
        let board = Board::new(15, 15);
        assert_eq!(winning_run(&board, 225, 5), None);
    }
}
