//! Strictly N×N - terminal tic-tac-toe
//!
//! Plays one game on the current terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_nxn::Game;
use strictly_nxn_term::{Cli, Screen, play, spawn_interrupt_watcher, spawn_stdin_reader};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.game_config()?;
    let mut game = Game::new(&config)
        .context("Game is not playable. Run with --help to see the possible arguments")?;
    info!(size = config.size, players = game.roster().len(), "Starting game");

    let (tx, rx) = mpsc::channel(16);
    spawn_stdin_reader(tx.clone());
    spawn_interrupt_watcher(tx);

    let screen = Screen::new(!cli.no_color, true);
    let mut stdout = std::io::stdout();
    play(&mut game, rx, &mut stdout, &screen).await?;

    Ok(())
}
