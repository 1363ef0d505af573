//! Board coordinates and player input parsing.

use super::MoveError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A 0-based cell coordinate.
///
/// Displayed 1-based, the way players type it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Position {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Position {
    /// Parses player input of the form `<row>,<column>` (1-based).
    ///
    /// Surrounding whitespace is ignored and whitespace may follow the
    /// comma. Both numbers must lie in `1..=size`.
    #[instrument]
    pub fn parse(raw: &str, size: usize) -> Result<Self, MoveError> {
        let input = raw.trim();
        let malformed = || MoveError::MalformedInput(input.to_string());

        let (row, col) = input.split_once(',').ok_or_else(malformed)?;
        let col = col.trim_start();
        if !is_number(row) || !is_number(col) {
            return Err(malformed());
        }

        Ok(Self {
            row: coordinate(row, size)?,
            col: coordinate(col, size)?,
        })
    }

    /// Returns true if the cell lies on the `row == col` diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Returns true if the cell lies on the `row == size - 1 - col` diagonal.
    pub fn on_anti_diagonal(self, size: usize) -> bool {
        self.row + self.col + 1 == size
    }
}

fn is_number(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Converts a 1-based coordinate to 0-based, rejecting anything off the board.
fn coordinate(digits: &str, size: usize) -> Result<usize, MoveError> {
    match digits.parse::<usize>() {
        Ok(n) if (1..=size).contains(&n) => Ok(n - 1),
        // Digit strings too long for usize are off the board too.
        _ => Err(MoveError::OutOfRange { size }),
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row + 1, self.col + 1)
    }
}
