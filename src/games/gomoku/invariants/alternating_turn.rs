//! Alternating turn invariant: stones alternate between the players.

use super::super::game::Game;
use super::super::types::Cell;
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The stone at each history entry must belong to the player whose turn
/// it was, starting from the configured first player. While the game is
/// in progress the player to move follows the same parity; once the
/// game ends the turn stops passing, so the player to move stays the
/// one who made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let first = game.first_player();
        let by_turn = |turn: usize| {
            if turn % 2 == 0 {
                first
            } else {
                first.opponent()
            }
        };

        for (turn, &index) in game.history().iter().enumerate() {
            if game.board().get(index) != Some(Cell::Stone(by_turn(turn))) {
                return false;
            }
        }

        let expected = if game.status().is_terminal() {
            by_turn(game.history().len().saturating_sub(1))
        } else {
            by_turn(game.history().len())
        };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting from the first player"
    }
}
