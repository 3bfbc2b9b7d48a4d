//! Game engine for gomoku.
//!
//! [`Game`] owns the board, the turn order, and the move history, and is
//! the only place moves get applied. Rejected moves leave the game
//! untouched, so callers can retry after an error without resetting
//! anything.

use tracing::{debug, instrument};

use super::config::{BoardConfig, ConfigError};
use super::invariants;
use super::rules;
use super::types::{Board, Cell, GameStatus, Player};

/// A gomoku game in play or finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) n_in_row: usize,
    pub(crate) first_player: Player,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<usize>,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Creates a game from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] when the configuration
    /// cannot form a playable board.
    #[instrument]
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(*config.width(), *config.height()),
            n_in_row: *config.n_in_row(),
            first_player: *config.first_player(),
            to_move: *config.first_player(),
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Places a stone for the player to move at the given cell index.
    ///
    /// On success the move is recorded in the history, the status is
    /// re-evaluated, and the turn passes to the opponent unless the move
    /// ended the game. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] when the game has ended.
    /// - [`MoveError::OutOfRange`] when `index` is not a cell on the
    ///   board.
    /// - [`MoveError::CellOccupied`] when the cell already holds a
    ///   stone.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        if index >= self.board.cell_count() {
            return Err(MoveError::OutOfRange {
                index,
                cell_count: self.board.cell_count(),
            });
        }
        if !self.board.is_empty_cell(index) {
            return Err(MoveError::CellOccupied(index));
        }

        let player = self.to_move;
        self.board.set(index, Cell::Stone(player));
        self.history.push(index);
        self.status = self.evaluate_termination(index);

        if self.status.is_terminal() {
            debug!(%player, index, status = %self.status, "game ended");
        } else {
            self.to_move = player.opponent();
            debug!(%player, index, next = %self.to_move, "stone placed");
        }

        self.assert_invariants();
        Ok(self.status.clone())
    }

    /// Determines the status after a stone landed at `last_index`.
    fn evaluate_termination(&self, last_index: usize) -> GameStatus {
        if let Some(run) = rules::winning_run(&self.board, last_index, self.n_in_row) {
            return GameStatus::Won {
                player: run.player,
                line: run.line,
            };
        }
        if rules::is_full(&self.board) {
            return GameStatus::Drawn;
        }
        GameStatus::InProgress
    }

    /// Rebuilds a game by applying `moves` in order to a fresh board.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Config`] when the configuration is
    /// invalid, or [`ReplayError::Move`] naming the turn at which a
    /// recorded move failed to apply.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(config: BoardConfig, moves: &[usize]) -> Result<Self, ReplayError> {
        let mut game = Self::new(config)?;
        for (turn, &index) in moves.iter().enumerate() {
            game.apply_move(index)
                .map_err(|source| ReplayError::Move {
                    turn,
                    index,
                    source,
                })?;
        }
        Ok(game)
    }

    /// Returns the player whose turn it is.
    ///
    /// After a terminal move this still names the player who made it;
    /// the turn no longer passes once the game is over.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the current status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell indices played so far, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the run length required to win.
    pub fn n_in_row(&self) -> usize {
        self.n_in_row
    }

    /// Returns the player who opened the game.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the most recently played cell index.
    pub fn last_move(&self) -> Option<usize> {
        self.history.last().copied()
    }

    /// Returns the indices of all empty cells, ascending.
    ///
    /// Empty for a finished game: there are no legal moves once the
    /// game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.board
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Debug-build check that the game state is still coherent.
    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = invariants::check_all(self)
        {
            panic!("game state corrupted: {violations:?}");
        }
    }
}

/// Error from applying a move to a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index does not lie on the board.
    #[display("cell index {index} is out of range for a board of {cell_count} cells")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of cells on the board.
        cell_count: usize,
    },
    /// The cell already holds a stone.
    #[display("cell {_0} is already occupied")]
    CellOccupied(usize),
    /// The game has already been won or drawn.
    #[display("game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

/// Error from replaying a recorded move sequence.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// The configuration cannot form a playable board.
    #[display("{_0}")]
    Config(ConfigError),
    /// A recorded move failed to apply.
    #[display("move {index} at turn {turn} failed: {source}")]
    Move {
        /// Zero-based position of the failing move in the sequence.
        turn: usize,
        /// The cell index that failed to apply.
        index: usize,
        /// The underlying move error.
        source: MoveError,
    },
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Config(source) => Some(source),
            ReplayError::Move { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for ReplayError {
    fn from(source: ConfigError) -> Self {
        ReplayError::Config(source)
    }
}
