//! Core domain types for gomoku.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// First player (moves first by default).
    One,
    /// Second player.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Single-character glyph used when rendering boards.
    pub fn glyph(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "one"),
            Player::Two => write!(f, "two"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No stone placed.
    Empty,
    /// A stone belonging to a player.
    Stone(Player),
}

/// Rectangular board of cells in row-major order.
///
/// Cell indices run `0..width*height` with `index = row * width + col`,
/// so index 0 is the top-left corner and indices grow left to right, top
/// to bottom. The board is pure storage; rules live in [`super::rules`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with every cell empty.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Gets the cell at the given index, or `None` out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index.
    ///
    /// The index must be in range; callers validate before writing.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Checks whether the cell at the given index is empty.
    ///
    /// Out-of-range indices are not empty cells.
    pub fn is_empty_cell(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Converts an in-range cell index to a position.
    pub fn position_of(&self, index: usize) -> Option<Position> {
        (index < self.cells.len()).then(|| Position::from_index(index, self.width))
    }

    /// Converts an on-board position to its cell index.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        (position.row < self.height && position.col < self.width)
            .then(|| position.to_index(self.width))
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as one text row per board row, `.` for empty
    /// cells and the players' glyphs for stones.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let glyph = match self.cells[row * self.width + col] {
                    Cell::Empty => '.',
                    Cell::Stone(player) => player.glyph(),
                };
                write!(f, "{glyph}")?;
            }
            if row + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Current status of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        player: Player,
        /// Winning line: cell indices of the run through the final move,
        /// ascending, at least the required run length long.
        line: Vec<usize>,
    },
    /// Game ended with a full board and no winning run.
    Drawn,
}

impl GameStatus {
    /// True once the game can no longer accept moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if the game has one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line, empty unless the game was won.
    pub fn winning_line(&self) -> &[usize] {
        match self {
            GameStatus::Won { line, .. } => line,
            _ => &[],
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won { player, .. } => write!(f, "won by player {player}"),
            GameStatus::Drawn => write!(f, "drawn"),
        }
    }
}
