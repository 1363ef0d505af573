//! N×N tic-tac-toe engine for any number of players.
//!
//! The engine owns the board, the roster and a live-line tracker, and
//! turns raw `<row>,<column>` input into a [`TurnOutcome`]. Rendering
//! and reading input are left to the caller.
//!
//! # Architecture
//!
//! - **Board**: N×N grid of append-only cells (3 ≤ N ≤ 50)
//! - **WinTracker**: shrinking sets of rows, columns and diagonals that
//!   can still be won; a draw is declared as soon as all are gone
//! - **Roster**: players in cyclic turn order, one distinct symbol each
//! - **Game**: validates moves, advances turns and reports outcomes
//!
//! # Example
//!
//! ```
//! use strictly_nxn::{Game, GameConfig, TurnOutcome};
//!
//! let mut game = Game::new(&GameConfig::default())?;
//! for input in ["1,1", "1,2", "2,2", "2,1"] {
//!     assert_eq!(game.submit_move(input)?, TurnOutcome::Continue);
//! }
//! let outcome = game.submit_move("3,3")?;
//! assert!(matches!(outcome, TurnOutcome::Win { .. }));
//! assert!(game.is_finished());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod game;
pub mod invariants;
mod line;
mod position;
mod roster;
mod symbol;
mod tracker;

// Crate-level exports - Moves
pub use action::{Move, MoveError};

// Crate-level exports - Board
pub use board::{Board, MAX_SIZE, MIN_SIZE};
pub use line::{Diagonal, Line};
pub use position::Position;
pub use symbol::Symbol;

// Crate-level exports - Outcome detection
pub use tracker::{Evaluation, WinTracker};

// Crate-level exports - Players
pub use roster::{Player, Roster};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_SIZE, GameConfig};

// Crate-level exports - Engine
pub use game::{Game, GameSetup, Outcome, Phase, TurnOutcome};
