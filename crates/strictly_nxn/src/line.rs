//! Rows, columns and diagonals of an N×N board.

use super::Position;
use serde::{Deserialize, Serialize};

/// One of the two board diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Diagonal {
    /// Top-left to bottom-right (`row == col`).
    Negative,
    /// Bottom-left to top-right (`row == size - 1 - col`).
    Positive,
}

impl Diagonal {
    /// Returns true if `pos` lies on this diagonal of a `size`-wide board.
    pub fn contains(self, pos: Position, size: usize) -> bool {
        match self {
            Diagonal::Negative => pos.on_main_diagonal(),
            Diagonal::Positive => pos.on_anti_diagonal(size),
        }
    }

    /// Returns the cell of this diagonal in column `i`.
    pub fn cell(self, i: usize, size: usize) -> Position {
        match self {
            Diagonal::Negative => Position::new(i, i),
            Diagonal::Positive => Position::new(size - 1 - i, i),
        }
    }
}

/// A line that can be won by filling it with one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// A row, by 0-based index.
    Row(usize),
    /// A column, by 0-based index.
    Column(usize),
    /// One of the two diagonals.
    Diagonal(Diagonal),
}

impl Line {
    /// Iterates the positions of this line on a `size`-wide board.
    pub fn cells(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(col) => Position::new(i, col),
            Line::Diagonal(diagonal) => diagonal.cell(i, size),
        })
    }

    /// Every line of a `size`-wide board: rows, then columns, then diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain(<Diagonal as strum::IntoEnumIterator>::iter().map(Line::Diagonal))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row + 1),
            Line::Column(col) => write!(f, "column {}", col + 1),
            Line::Diagonal(Diagonal::Negative) => write!(f, "main diagonal"),
            Line::Diagonal(Diagonal::Positive) => write!(f, "anti-diagonal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_cells() {
        let row: Vec<_> = Line::Row(1).cells(3).collect();
        assert_eq!(row, vec![Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]);

        let col: Vec<_> = Line::Column(2).cells(3).collect();
        assert_eq!(col, vec![Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]);

        let anti: Vec<_> = Line::Diagonal(Diagonal::Positive).cells(3).collect();
        assert_eq!(anti, vec![Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)]);
    }

    #[test]
    fn test_diagonal_cells_are_members() {
        for size in [3, 4, 7] {
            for diagonal in [Diagonal::Negative, Diagonal::Positive] {
                assert!(
                    Line::Diagonal(diagonal)
                        .cells(size)
                        .all(|pos| diagonal.contains(pos, size))
                );
            }
        }
    }

    #[test]
    fn test_all_lines_count() {
        assert_eq!(Line::all(3).count(), 8);
        assert_eq!(Line::all(10).count(), 22);
    }
}
