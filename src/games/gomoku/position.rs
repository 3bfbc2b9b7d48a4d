//! Board coordinates and their mapping to flat cell indices.

use serde::{Deserialize, Serialize};

/// A coordinate on the board, zero-based from the top-left corner.
///
/// The external interface speaks in flat row-major cell indices;
/// `Position` is the typed bridge for collaborators and rules code that
/// think in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row, counting down from the top.
    pub row: usize,
    /// Zero-based column, counting right from the left edge.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts to a row-major cell index on a board of the given width.
    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    /// Converts a row-major cell index back to a position.
    ///
    /// `width` must be non-zero. The result is only on the board when the
    /// index was in range; use [`crate::Board::position_of`] for a
    /// bounds-checked conversion.
    pub fn from_index(index: usize, width: usize) -> Self {
        debug_assert!(width > 0, "board width must be non-zero");
        Self {
            row: index / width,
            col: index % width,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
