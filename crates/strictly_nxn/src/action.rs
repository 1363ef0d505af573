//! First-class move records and move errors.
//!
//! Moves are domain events, not side effects. The game records one
//! for every accepted placement so invariants can be re-checked
//! against the board.

use super::Position;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A seat placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Seat index of the player that moved.
    pub seat: usize,
    /// Where the mark was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat {} -> {}", self.seat, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: the board is untouched and the
/// same player is still to move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Input did not look like `<row>,<column>`.
    #[display("Make sure input is in the following format: <number>,<number>")]
    MalformedInput(String),

    /// A coordinate fell outside the board.
    #[display("Input number should be between 1 and {}.", size)]
    OutOfRange {
        /// Board dimension.
        size: usize,
    },

    /// The cell already holds a mark.
    #[display("Already marked. Choose another position!")]
    CellOccupied(Position),

    /// The game has finished and accepts no further moves.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
