//! Board state: a fixed-size N-by-N grid of cells.

use crate::geometry;
use crate::types::{Cell, PlayerId};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Errors raised by grid addressing.
///
/// These are contract violations by the caller, not game conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The index lies outside `[0, len)`.
    #[display("Index {} out of range for grid of {} cells", index, len)]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of cells in the grid.
        len: usize,
    },
    /// A cell vector did not have exactly `size * size` entries.
    #[display("Wrong cell count for a {}x{} grid: got {}", size, size, actual)]
    WrongCellCount {
        /// Grid side length.
        size: usize,
        /// Number of cells supplied.
        actual: usize,
    },
}

/// N-by-N grid, stored row-major.
///
/// The cell count is fixed at `size * size` for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_cells(raw.size, raw.cells)
    }
}

impl Grid {
    /// Creates an all-empty grid.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Builds a grid from explicit cells in row-major order.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if cells.len() != size * size {
            return Err(GridError::WrongCellCount {
                size,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, always N².
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True only for the degenerate 0x0 grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the content of the cell at `index`.
    pub fn cell_at(&self, index: usize) -> Result<Cell, GridError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GridError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Returns a copy of this grid with `player`'s marker at `index`.
    ///
    /// Whatever was in the cell before is overwritten; legality of the
    /// move is the engine's concern.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn with_marker(&self, index: usize, player: PlayerId) -> Result<Grid, GridError> {
        self.cell_at(index)?;
        let mut next = self.clone();
        next.cells[index] = Cell::Occupied(player);
        Ok(next)
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cell_at(index), Ok(Cell::Empty))
    }

    /// Converts `(row, col)` to a flat index.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        geometry::index_of(self.size, row, col)
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding any marker.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells holding `player`'s marker.
    pub fn count_for(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(self.size.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(player) => write!(f, "{}", player.get())?,
                }
            }
        }
        Ok(())
    }
}
