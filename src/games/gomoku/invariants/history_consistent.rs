//! History consistency invariant: history matches occupied cells.

use std::collections::HashSet;

use super::super::game::Game;
use super::super::types::{Board, Cell};
use super::Invariant;

/// Invariant: the history and the board describe the same moves.
///
/// Every history entry names a distinct occupied cell, and there are
/// exactly as many occupied cells as history entries. No moves are
/// missing, no cells are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let occupied = game
            .board()
            .cells()
            .iter()
            .filter(|cell| **cell != Cell::Empty)
            .count();
        if game.history().len() != occupied {
            return false;
        }

        let mut seen = HashSet::new();
        game.history()
            .iter()
            .all(|&index| stone_present(game.board(), index) && seen.insert(index))
    }

    fn description() -> &'static str {
        "History entries name distinct occupied cells and account for every stone"
    }
}

fn stone_present(board: &Board, index: usize) -> bool {
    matches!(board.get(index), Some(Cell::Stone(_)))
}
