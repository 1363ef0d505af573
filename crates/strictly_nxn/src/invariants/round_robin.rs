//! Round-robin invariant: seats move in cyclic order.

use super::Invariant;
use crate::{Game, Outcome};

/// Invariant: the n-th move was made by seat `n mod players`, and the
/// current seat follows from the history.
pub struct RoundRobinInvariant;

impl Invariant<Game> for RoundRobinInvariant {
    fn holds(game: &Game) -> bool {
        let players = game.roster().len();
        let in_order = game
            .moves()
            .iter()
            .enumerate()
            .all(|(turn, mov)| mov.seat == turn % players);

        let made = game.moves().len();
        let decided = game.result().is_some_and(|outcome| {
            !matches!(outcome, Outcome::Abandoned)
        });
        // A decided game keeps the seat that made the final move.
        let expected = if decided { (made - 1) % players } else { made % players };

        in_order && *game.current_player().seat() == expected
    }

    fn description() -> &'static str {
        "Players move in round-robin order"
    }
}
