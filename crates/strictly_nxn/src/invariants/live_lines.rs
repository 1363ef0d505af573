//! Live-lines invariant: the tracker agrees with the board.

use super::Invariant;
use crate::{Game, Line, Outcome, Symbol};

/// Invariant: a line is dead exactly when it holds two distinct symbols.
///
/// Dead lines are always mixed. While no one has won, live lines hold at
/// most one distinct symbol; a winning move stops evaluation early, so
/// after a win some mixed lines may not have been dropped yet.
pub struct LiveLinesInvariant;

impl Invariant<Game> for LiveLinesInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let tracker = game.tracker();
        let won = matches!(game.result(), Some(Outcome::Win { .. }));

        Line::all(board.size()).all(|line| {
            let mixed = is_mixed(board.line(line));
            if tracker.is_live(line) {
                won || !mixed
            } else {
                mixed
            }
        })
    }

    fn description() -> &'static str {
        "Live lines are exactly the lines holding at most one symbol"
    }
}

fn is_mixed(cells: impl Iterator<Item = Option<Symbol>>) -> bool {
    let mut first = None;
    for mark in cells.flatten() {
        match first {
            None => first = Some(mark),
            Some(seen) if seen != mark => return true,
            Some(_) => {}
        }
    }
    false
}
