//! Status consistency invariant: the recorded status matches the board.

use super::super::game::Game;
use super::super::rules;
use super::super::types::GameStatus;
use super::Invariant;

/// Invariant: the game status agrees with what the board shows.
///
/// An in-progress game has no completed run through the last move and
/// room left to play. A won game's recorded line is exactly the run
/// that detection finds through the last move. A drawn game has a full
/// board and no run through the last move.
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let run_through_last = game
            .last_move()
            .and_then(|last| rules::winning_run(game.board(), last, game.n_in_row()));

        match game.status() {
            GameStatus::InProgress => {
                run_through_last.is_none() && !rules::is_full(game.board())
            }
            GameStatus::Won { player, line } => run_through_last
                .is_some_and(|run| run.player == *player && run.line == *line),
            GameStatus::Drawn => run_through_last.is_none() && rules::is_full(game.board()),
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board and the last move"
    }
}
