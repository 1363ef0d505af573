//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: the board equals the move history replayed onto an empty board.
///
/// Replaying fails if any move lands on an occupied cell, so a board that
/// matches its replay has never had a mark overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let Ok(mut reconstructed) = Board::new(game.board().size()) else {
            return false;
        };

        for mov in game.moves() {
            let Some(player) = game.roster().get(mov.seat) else {
                return false;
            };
            if reconstructed.place(mov.position, *player.symbol()).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
