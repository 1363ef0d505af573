//! Terminal front end for the strictly_nxn engine.
//!
//! Parses flags and config files, draws the board with `crossterm`
//! styling, and feeds typed moves to the engine until the game ends or
//! the player presses Ctrl-C.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod input;
pub mod play;
pub mod render;
pub mod settings;

pub use cli::Cli;
pub use input::{Input, spawn_interrupt_watcher, spawn_stdin_reader};
pub use play::play;
pub use render::{Screen, player_color};
pub use settings::load_config;
