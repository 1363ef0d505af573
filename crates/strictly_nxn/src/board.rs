//! N×N board storage.

use super::{ConfigError, Line, MoveError, Position, Symbol};
use serde::Serialize;
use tracing::{debug, instrument};

/// Smallest supported board dimension.
pub const MIN_SIZE: usize = 3;

/// Largest supported board dimension.
pub const MAX_SIZE: usize = 50;

/// Grid of optional symbols, one per cell.
///
/// The dimension is fixed at construction. Cells are append-only:
/// once marked they are never cleared or overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Option<Symbol>>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ConfigError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `pos` is on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Returns the mark at `pos`, or `None` for an empty or off-board cell.
    pub fn get(&self, pos: Position) -> Option<Symbol> {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    /// Marks a cell.
    ///
    /// Fails without touching the board if `pos` is off the board or
    /// already marked.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, pos: Position, symbol: Symbol) -> Result<(), MoveError> {
        if !self.contains(pos) {
            return Err(MoveError::OutOfRange { size: self.size });
        }
        let index = self.index(pos);
        if self.cells[index].is_some() {
            debug!(%pos, "Cell already marked");
            return Err(MoveError::CellOccupied(pos));
        }
        self.cells[index] = Some(symbol);
        Ok(())
    }

    /// Iterates the marks along a row, column or diagonal.
    pub fn line(&self, line: Line) -> impl Iterator<Item = Option<Symbol>> + '_ {
        line.cells(self.size).map(|pos| self.cells[self.index(pos)])
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Symbol>]> {
        self.cells.chunks(self.size)
    }

    /// Returns an owned copy of the grid for rendering.
    pub fn snapshot(&self) -> Vec<Vec<Option<Symbol>>> {
        self.rows().map(<[_]>::to_vec).collect()
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}
