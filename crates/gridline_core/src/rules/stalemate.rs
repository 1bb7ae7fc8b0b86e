//! Stalemate detection.
//!
//! The game has no draw status: a full grid without a winner simply
//! accepts no further placements until it is restarted.

use crate::grid::Grid;
use crate::rules::win::check_winner;
use tracing::instrument;

/// Checks if the grid is full and no line is won.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn is_stalemate(grid: &Grid) -> bool {
    grid.is_full() && check_winner(grid).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerId;

    fn fill(size: usize, owner: impl Fn(usize) -> u8) -> Grid {
        (0..size * size).fold(Grid::new(size), |grid, i| {
            grid.with_marker(i, PlayerId::new(owner(i)).unwrap()).unwrap()
        })
    }

    #[test]
    fn test_empty_grid_not_stalemate() {
        assert!(!is_stalemate(&Grid::new(3)));
    }

    #[test]
    fn test_partial_grid_not_stalemate() {
        let grid = Grid::new(3).with_marker(4, PlayerId::FIRST).unwrap();
        assert!(!is_stalemate(&grid));
    }

    #[test]
    fn test_full_grid_without_winner() {
        // 1 2 1
        // 1 2 2
        // 2 1 1
        let owners = [1, 2, 1, 1, 2, 2, 2, 1, 1];
        let grid = fill(3, |i| owners[i]);
        assert!(is_stalemate(&grid));
    }

    #[test]
    fn test_full_grid_with_winner() {
        let grid = fill(3, |_| 1);
        assert!(!is_stalemate(&grid));
    }
}
