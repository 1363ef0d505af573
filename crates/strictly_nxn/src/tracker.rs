//! Incremental win and draw detection.
//!
//! The tracker keeps the set of lines that could still be filled with a
//! single symbol. A line leaves its set the first time it holds two
//! distinct symbols and never comes back, so evaluation only ever scans
//! the row, column and diagonals through the last move, and only while
//! those lines are still live. Once every set is empty the game is a
//! draw, however many cells remain empty.

use super::{Board, Diagonal, Line, Position, Symbol};
use serde::Serialize;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, trace};

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Evaluation {
    /// Some line can still be won.
    Undecided,
    /// The moving symbol fills this line.
    Won(Line),
    /// No line can ever be filled with one symbol.
    Drawn,
}

impl Evaluation {
    /// Returns true if the move won the game.
    pub fn is_won(&self) -> bool {
        matches!(self, Evaluation::Won(_))
    }

    /// Returns true if the game can no longer be won.
    pub fn is_drawn(&self) -> bool {
        matches!(self, Evaluation::Drawn)
    }
}

/// What a scan of one line found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// Every cell holds the moving symbol.
    Complete,
    /// Two or more distinct symbols: the line is dead.
    Mixed,
    /// At most one symbol and at least one empty cell.
    Open,
}

/// Live-line bookkeeping for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinTracker {
    size: usize,
    live_rows: BTreeSet<usize>,
    live_columns: BTreeSet<usize>,
    live_diagonals: BTreeSet<Diagonal>,
}

impl WinTracker {
    /// Creates a tracker with every line of a `size`-wide board live.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            live_rows: (0..size).collect(),
            live_columns: (0..size).collect(),
            live_diagonals: Diagonal::iter().collect(),
        }
    }

    /// Rows that can still be won.
    pub fn live_rows(&self) -> &BTreeSet<usize> {
        &self.live_rows
    }

    /// Columns that can still be won.
    pub fn live_columns(&self) -> &BTreeSet<usize> {
        &self.live_columns
    }

    /// Diagonals that can still be won.
    pub fn live_diagonals(&self) -> &BTreeSet<Diagonal> {
        &self.live_diagonals
    }

    /// Returns true if `line` can still be won.
    pub fn is_live(&self, line: Line) -> bool {
        match line {
            Line::Row(row) => self.live_rows.contains(&row),
            Line::Column(col) => self.live_columns.contains(&col),
            Line::Diagonal(diagonal) => self.live_diagonals.contains(&diagonal),
        }
    }

    /// Total number of live lines.
    pub fn live_count(&self) -> usize {
        self.live_rows.len() + self.live_columns.len() + self.live_diagonals.len()
    }

    /// Returns true while at least one line can still be won.
    pub fn is_winnable(&self) -> bool {
        !(self.live_rows.is_empty()
            && self.live_columns.is_empty()
            && self.live_diagonals.is_empty())
    }

    /// Evaluates the board after `symbol` was placed at `last`.
    ///
    /// Checks the row, then the column, then the diagonals (negative
    /// before positive); the first completed line wins. Lines found to
    /// hold two distinct symbols are dropped along the way.
    #[instrument(skip(self, board), fields(live = self.live_count()))]
    pub fn evaluate(&mut self, board: &Board, last: Position, symbol: Symbol) -> Evaluation {
        if self.live_rows.contains(&last.row) {
            let line = Line::Row(last.row);
            match inspect(board, line, symbol) {
                LineState::Complete => return won(line),
                LineState::Mixed => {
                    self.live_rows.remove(&last.row);
                    debug!(%line, "Line can no longer be won");
                }
                LineState::Open => {}
            }
        }

        if self.live_columns.contains(&last.col) {
            let line = Line::Column(last.col);
            match inspect(board, line, symbol) {
                LineState::Complete => return won(line),
                LineState::Mixed => {
                    self.live_columns.remove(&last.col);
                    debug!(%line, "Line can no longer be won");
                }
                LineState::Open => {}
            }
        }

        let on_diagonal = last.on_main_diagonal() || last.on_anti_diagonal(self.size);
        if on_diagonal && !self.live_diagonals.is_empty() {
            for diagonal in Diagonal::iter() {
                if !self.live_diagonals.contains(&diagonal) {
                    continue;
                }
                let line = Line::Diagonal(diagonal);
                match inspect(board, line, symbol) {
                    LineState::Complete => return won(line),
                    LineState::Mixed => {
                        self.live_diagonals.remove(&diagonal);
                        debug!(%line, "Line can no longer be won");
                    }
                    LineState::Open => {}
                }
            }
        }

        trace!(remaining = self.live_count(), "Evaluation complete");
        if self.is_winnable() {
            Evaluation::Undecided
        } else {
            debug!("No live lines left");
            Evaluation::Drawn
        }
    }
}

fn won(line: Line) -> Evaluation {
    debug!(%line, "Line completed");
    Evaluation::Won(line)
}

/// Scans one line for completion by `symbol` or a second distinct symbol.
fn inspect(board: &Board, line: Line, symbol: Symbol) -> LineState {
    let mut complete = true;
    let mut seen: Option<Symbol> = None;

    for cell in board.line(line) {
        match (cell, seen) {
            (None, _) => complete = false,
            (Some(mark), None) => {
                complete &= mark == symbol;
                seen = Some(mark);
            }
            (Some(mark), Some(first)) if mark != first => return LineState::Mixed,
            (Some(mark), Some(_)) => complete &= mark == symbol,
        }
    }

    if complete {
        LineState::Complete
    } else {
        LineState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: char) -> Symbol {
        Symbol::from_char(c).unwrap()
    }

    /// Places marks one at a time, returning the last evaluation.
    fn play(
        board: &mut Board,
        tracker: &mut WinTracker,
        moves: &[(usize, usize, char)],
    ) -> Evaluation {
        let mut last = Evaluation::Undecided;
        for &(row, col, c) in moves {
            let pos = Position::new(row, col);
            board.place(pos, sym(c)).unwrap();
            last = tracker.evaluate(board, pos, sym(c));
        }
        last
    }

    #[test]
    fn test_new_tracker_is_fully_live() {
        for size in 3..=50 {
            let tracker = WinTracker::new(size);
            assert_eq!(tracker.live_rows().len(), size);
            assert_eq!(tracker.live_columns().len(), size);
            assert_eq!(tracker.live_diagonals().len(), 2);
            assert_eq!(tracker.live_count(), 2 * size + 2);
        }
    }

    #[test]
    fn test_row_win_on_completing_move_only() {
        let mut board = Board::new(4).unwrap();
        let mut tracker = WinTracker::new(4);
        let eval = play(&mut board, &mut tracker, &[(2, 0, 'x'), (2, 1, 'x'), (2, 2, 'x')]);
        assert_eq!(eval, Evaluation::Undecided);
        let eval = play(&mut board, &mut tracker, &[(2, 3, 'x')]);
        assert_eq!(eval, Evaluation::Won(Line::Row(2)));
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new(3).unwrap();
        let mut tracker = WinTracker::new(3);
        let eval = play(&mut board, &mut tracker, &[(0, 1, 'o'), (2, 1, 'o'), (1, 1, 'o')]);
        assert_eq!(eval, Evaluation::Won(Line::Column(1)));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = Board::new(5).unwrap();
        let mut tracker = WinTracker::new(5);
        let moves: Vec<_> = (0..5).map(|i| (4 - i, i, '#')).collect();
        let eval = play(&mut board, &mut tracker, &moves);
        assert_eq!(eval, Evaluation::Won(Line::Diagonal(Diagonal::Positive)));
    }

    #[test]
    fn test_mixed_row_is_eliminated() {
        let mut board = Board::new(3).unwrap();
        let mut tracker = WinTracker::new(3);
        play(&mut board, &mut tracker, &[(0, 0, 'x')]);
        assert!(tracker.is_live(Line::Row(0)));

        play(&mut board, &mut tracker, &[(0, 2, 'o')]);
        assert!(!tracker.is_live(Line::Row(0)));
        assert!(tracker.is_live(Line::Column(0)));
        assert!(tracker.is_live(Line::Column(2)));
        // (0,0) and (0,2) sit on different diagonals.
        assert_eq!(tracker.live_diagonals().len(), 2);
    }

    #[test]
    fn test_same_symbol_keeps_line_live() {
        let mut board = Board::new(3).unwrap();
        let mut tracker = WinTracker::new(3);
        play(&mut board, &mut tracker, &[(1, 0, 'x'), (1, 2, 'x')]);
        assert!(tracker.is_live(Line::Row(1)));
    }

    #[test]
    fn test_centre_cell_touches_both_diagonals() {
        let mut board = Board::new(3).unwrap();
        let mut tracker = WinTracker::new(3);
        play(&mut board, &mut tracker, &[(0, 0, 'x'), (2, 0, 'x'), (1, 1, 'o')]);
        assert!(tracker.live_diagonals().is_empty());
    }

    #[test]
    fn test_diagonals_tracked_independently() {
        let mut board = Board::new(4).unwrap();
        let mut tracker = WinTracker::new(4);
        play(&mut board, &mut tracker, &[(0, 0, 'x'), (3, 3, 'o')]);
        assert!(!tracker.is_live(Line::Diagonal(Diagonal::Negative)));
        assert!(tracker.is_live(Line::Diagonal(Diagonal::Positive)));
    }

    #[test]
    fn test_draw_declared_once_no_line_is_live() {
        // x o x
        // x o o
        // o x _
        let mut board = Board::new(3).unwrap();
        let mut tracker = WinTracker::new(3);
        let eval = play(
            &mut board,
            &mut tracker,
            &[
                (0, 0, 'x'),
                (1, 1, 'o'),
                (0, 2, 'x'),
                (0, 1, 'o'),
                (1, 0, 'x'),
                (1, 2, 'o'),
                (2, 1, 'x'),
            ],
        );
        assert_eq!(eval, Evaluation::Undecided);
        let eval = play(&mut board, &mut tracker, &[(2, 0, 'o')]);
        assert!(eval.is_drawn());
        assert!(!board.is_full());
        assert!(!tracker.is_winnable());
    }
}
