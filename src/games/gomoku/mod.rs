mod config;
mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use config::{BoardConfig, ConfigError};
pub use game::{Game, MoveError, ReplayError};
pub use position::Position;
pub use types::{Board, Cell, GameStatus, Player};
