//! Flat-index geometry for an N-by-N grid.
//!
//! Cells are stored row-major, so index `i` sits at row `i / n`,
//! column `i % n`. Every function here is pure and takes the grid size
//! explicitly; all of them require `n >= 1`.

use serde::{Deserialize, Serialize};

/// A row, column or diagonal of exactly `n` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `r`, left to right.
    Row(usize),
    /// Column `c`, top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Returns the flat indices covered by this line on a grid of size `n`.
    pub fn indices(self, n: usize) -> Vec<usize> {
        match self {
            Line::Row(r) => row_indices(n, r).collect(),
            Line::Column(c) => column_indices(n, c).collect(),
            Line::MainDiagonal => main_diagonal(n).collect(),
            Line::AntiDiagonal => anti_diagonal(n).collect(),
        }
    }

    /// Checks if this line passes through `index` on a grid of size `n`.
    pub fn contains(self, n: usize, index: usize) -> bool {
        let (row, col) = position(n, index);
        match self {
            Line::Row(r) => row == r,
            Line::Column(c) => col == c,
            Line::MainDiagonal => row == col,
            Line::AntiDiagonal => row + col == n - 1,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {}", r + 1),
            Line::Column(c) => write!(f, "column {}", c + 1),
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Converts a flat index to `(row, col)`.
pub fn position(n: usize, index: usize) -> (usize, usize) {
    debug_assert!(n >= 1, "grid size must be at least 1");
    (index / n, index % n)
}

/// Converts `(row, col)` to a flat index.
pub fn index_of(n: usize, row: usize, col: usize) -> usize {
    debug_assert!(row < n && col < n, "({row}, {col}) outside {n}x{n} grid");
    row * n + col
}

/// Indices of row `r`.
pub fn row_indices(n: usize, r: usize) -> impl Iterator<Item = usize> {
    debug_assert!(r < n, "row {r} outside {n}x{n} grid");
    (0..n).map(move |c| r * n + c)
}

/// Indices of column `c`.
pub fn column_indices(n: usize, c: usize) -> impl Iterator<Item = usize> {
    debug_assert!(c < n, "column {c} outside {n}x{n} grid");
    (0..n).map(move |r| r * n + c)
}

/// Indices `0, n+1, 2(n+1), ...`.
pub fn main_diagonal(n: usize) -> impl Iterator<Item = usize> {
    (0..n).map(move |k| k * (n + 1))
}

/// Indices `n-1, 2(n-1), 3(n-1), ...`.
pub fn anti_diagonal(n: usize) -> impl Iterator<Item = usize> {
    (1..=n).map(move |k| k * (n - 1))
}

/// All `2n + 2` lines in scan order: rows ascending, columns ascending,
/// main diagonal, anti-diagonal.
pub fn lines(n: usize) -> impl Iterator<Item = Line> {
    (0..n)
        .map(Line::Row)
        .chain((0..n).map(Line::Column))
        .chain([Line::MainDiagonal, Line::AntiDiagonal])
}
