//! Player input sources.
//!
//! Lines typed on stdin and Ctrl-C both arrive on one channel, so the
//! game loop only ever waits on a single receiver.

use std::io::BufRead;
use tokio::sync::mpsc::Sender;
use tracing::{debug, info, warn};

/// One event from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text, without its line ending.
    Line(String),
    /// The player asked to quit (Ctrl-C or end of input).
    Interrupt,
}

/// Reads stdin lines on a dedicated thread until end of input.
///
/// A plain thread is used because a blocking stdin read cannot be
/// cancelled and must not hold up runtime shutdown.
pub fn spawn_stdin_reader(tx: Sender<Input>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(Input::Line(line)).is_err() {
                        debug!("Input channel closed, stopping stdin reader");
                        return;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
        debug!("End of input");
        let _ = tx.blocking_send(Input::Interrupt);
    });
}

/// Forwards Ctrl-C to the game loop as [`Input::Interrupt`].
pub fn spawn_interrupt_watcher(tx: Sender<Input>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received");
                let _ = tx.send(Input::Interrupt).await;
            }
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });
}
