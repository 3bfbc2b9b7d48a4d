//! Game rules for gomoku.
//!
//! This module contains pure functions for evaluating board state
//! according to gomoku rules. Rules are separated from board storage so
//! they can be checked independently of how a game was reached.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Axis, WinningRun, winning_run};
