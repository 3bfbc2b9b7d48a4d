//! Gomoku game engine with a thread-safe session registry.
//!
//! This library implements N-in-a-row on rectangular boards, from bare
//! board storage up to a registry that juggles many concurrent games
//! behind opaque session ids.
//!
//! # Architecture
//!
//! - **Games**: board storage, win and draw rules, and the move state
//!   machine, with first-class invariants checked in debug builds
//! - **Session**: registry mapping random 128-bit ids to live games,
//!   safe to share across threads
//!
//! # Example
//!
//! ```
//! use gomoku_core::{BoardConfig, GameRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = GameRegistry::new();
//! let session = registry.create_game(BoardConfig::default())?;
//!
//! // Player one opens in the center of the 15x15 board.
//! let outcome = registry.submit_move(&session, 112)?;
//! assert!(!outcome.ended);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod session;

// Crate-level exports - Game types (gomoku)
pub use games::gomoku::{
    Board, BoardConfig, Cell, ConfigError, Game, GameStatus, MoveError, Player, Position,
    ReplayError,
};

// Crate-level exports - Rules and invariants
pub use games::gomoku::{invariants, rules};

// Crate-level exports - Session management
pub use session::{GameRegistry, GameSnapshot, MoveOutcome, RegistryError, SessionId};
