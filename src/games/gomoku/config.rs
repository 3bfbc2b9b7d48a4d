//! Board configuration for new games.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use super::types::Player;

/// Configuration of a gomoku board: dimensions, the run length required
/// to win, and which player opens.
///
/// The default is the classic free-style game: 15x15, five in a row,
/// player one to move. Missing fields deserialize to the defaults, so a
/// collaborator can accept `{}` as "standard game".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board width in cells.
    #[serde(default = "default_width")]
    width: usize,
    /// Board height in cells.
    #[serde(default = "default_height")]
    height: usize,
    /// Run length required to win.
    #[serde(default = "default_n_in_row")]
    n_in_row: usize,
    /// Player who moves first.
    #[serde(default = "default_first_player")]
    first_player: Player,
}

fn default_width() -> usize {
    15
}

fn default_height() -> usize {
    15
}

fn default_n_in_row() -> usize {
    5
}

fn default_first_player() -> Player {
    Player::One
}

impl BoardConfig {
    /// Creates a configuration with player one opening.
    pub fn new(width: usize, height: usize, n_in_row: usize) -> Self {
        Self {
            width,
            height,
            n_in_row,
            first_player: Player::One,
        }
    }

    /// Sets the player who moves first.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Total number of cells on the configured board.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Checks that the configuration describes a playable board.
    ///
    /// A zero-size grid cannot hold a stone, and a run length under two
    /// would let the opening stone win. A board too small to ever reach
    /// `n_in_row` in any direction is permitted: such games simply end
    /// drawn.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] with the offending
    /// values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 || self.n_in_row < 2 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
                n_in_row: self.n_in_row,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(15, 15, 5)
    }
}

/// Error from validating a board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// The dimensions cannot form a playable board.
    #[display("invalid dimensions: {width}x{height} board with {n_in_row} in a row to win")]
    InvalidDimensions {
        /// Requested board width.
        width: usize,
        /// Requested board height.
        height: usize,
        /// Requested run length.
        n_in_row: usize,
    },
}

impl std::error::Error for ConfigError {}
