//! Interactive game loop.

use crate::input::Input;
use crate::render::Screen;
use anyhow::{Context, Result};
use std::io::Write;
use strictly_nxn::{Game, Outcome, TurnOutcome};
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, instrument};

/// Plays `game` to the end, drawing to `out` and reading from `inputs`.
///
/// Rejected moves are shown as a notice and the same player is asked
/// again. An interrupt, or the input channel closing, abandons the game.
#[instrument(skip_all, fields(size = game.board().size(), players = game.roster().len()))]
pub async fn play(
    game: &mut Game,
    mut inputs: Receiver<Input>,
    out: &mut impl Write,
    screen: &Screen,
) -> Result<Outcome> {
    let mut notice: Option<String> = None;

    while !game.is_finished() {
        screen
            .draw_turn(out, game, notice.take().as_deref())
            .context("Failed to draw turn")?;

        match inputs.recv().await {
            Some(Input::Line(line)) => match game.submit_move(&line) {
                Ok(TurnOutcome::Continue) => {}
                Ok(outcome) => debug!(?outcome, "Final move"),
                Err(e) => {
                    debug!(error = %e, input = %line, "Move rejected");
                    notice = Some(e.to_string());
                }
            },
            Some(Input::Interrupt) | None => {
                game.abandon();
            }
        }
    }

    screen.draw_result(out, game).context("Failed to draw result")?;
    let outcome = game
        .result()
        .cloned()
        .context("Finished game has no result")?;
    info!(%outcome, moves = game.moves().len(), "Game over");
    Ok(outcome)
}
