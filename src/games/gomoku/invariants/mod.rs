//! First-class invariants for gomoku.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

use super::game::Game;

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or `Err` with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All gomoku invariants as a composable set.
pub type GomokuInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    StatusConsistentInvariant,
);

/// Checks every gomoku invariant against `game`.
pub fn check_all(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    GomokuInvariants::check_all(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{BoardConfig, Cell, GameStatus, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new(BoardConfig::default()).unwrap();
        assert!(GomokuInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new(BoardConfig::default()).unwrap();
        for index in [112, 113, 97, 98] {
            game.apply_move(index).unwrap();
        }
        assert!(GomokuInvariants::check_all(&game).is_ok());
        assert!(check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_for_finished_game() {
        let mut game = Game::new(BoardConfig::new(2, 1, 2)).unwrap();
        game.apply_move(0).unwrap();
        game.apply_move(1).unwrap();
        assert_eq!(game.status(), &GameStatus::Drawn);
        assert!(GomokuInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::new(BoardConfig::default()).unwrap();
        game.apply_move(112).unwrap();

        // Corrupt the board behind the game's back.
        game.board.set(0, Cell::Stone(Player::Two));

        let violations = GomokuInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new(BoardConfig::default()).unwrap();

        type TwoInvariants = (AlternatingTurnInvariant, HistoryConsistentInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
