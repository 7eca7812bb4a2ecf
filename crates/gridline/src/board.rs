//! Flat row-major board of configurable side length.

use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// Error for writes outside the board.
///
/// Only the history machinery writes cells, so this never escapes the
/// public game API; it exists to keep the one internal write honest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error,
)]
#[display("cell index {index} out of bounds for a {size}x{size} board")]
pub struct CellOutOfBounds {
    /// Offending index.
    pub index: usize,
    /// Board side length.
    pub size: usize,
}

/// Square board of `size`² cells, indexed row-major:
/// `index = row * size + col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells (size²).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if an index names an empty cell. Out-of-range indices
    /// are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Converts (row, col) to a flat index.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Converts a flat index to (row, col).
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Sets the cell at the given index. Snapshots stay immutable, so
    /// this is only reachable while building the next history entry.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) -> Result<(), CellOutOfBounds> {
        if index >= self.cells.len() {
            return Err(CellOutOfBounds {
                index,
                size: self.size,
            });
        }
        self.cells[index] = cell;
        Ok(())
    }

    /// Formats the board as a human-readable grid, for logs and tests.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.cells[self.index_of(row, col)] {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::X) => 'X',
                    Cell::Occupied(Player::O) => 'O',
                };
                result.push(symbol);
            }
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}
