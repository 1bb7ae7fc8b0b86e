//! Win detection.
//!
//! A line is won when every one of its N cells holds the same player.
//! Lines are scanned rows first, then columns, then the main diagonal,
//! then the anti-diagonal, and the first won line decides.

use crate::geometry::{self, Line};
use crate::grid::Grid;
use crate::types::{Cell, PlayerId};
use tracing::{instrument, trace};

/// Returns the player holding every cell of `cells`, if there is one.
///
/// An all-empty line has no winner, and neither has a line reaching past
/// the grid.
pub fn line_winner(grid: &Grid, mut cells: impl Iterator<Item = usize>) -> Option<PlayerId> {
    let first = match cells.next().and_then(|i| grid.cell_at(i).ok()) {
        Some(Cell::Occupied(player)) => player,
        Some(Cell::Empty) | None => return None,
    };
    cells
        .all(|i| grid.cell_at(i) == Ok(Cell::Occupied(first)))
        .then_some(first)
}

/// Returns the first won line in scan order and its owner.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn winning_line(grid: &Grid) -> Option<(Line, PlayerId)> {
    let n = grid.size();
    geometry::lines(n).find_map(|line| {
        let winner = match line {
            Line::Row(r) => line_winner(grid, geometry::row_indices(n, r)),
            Line::Column(c) => line_winner(grid, geometry::column_indices(n, c)),
            Line::MainDiagonal => line_winner(grid, geometry::main_diagonal(n)),
            Line::AntiDiagonal => line_winner(grid, geometry::anti_diagonal(n)),
        };
        if let Some(player) = winner {
            trace!(%line, %player, "Line won");
        }
        winner.map(|player| (line, player))
    })
}

/// Checks if there is a winner on the grid.
///
/// Total over any well-formed grid; an empty grid has no winner.
pub fn check_winner(grid: &Grid) -> Option<PlayerId> {
    winning_line(grid).map(|(_, player)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u8) -> PlayerId {
        PlayerId::new(id).unwrap()
    }

    fn grid_with(size: usize, marks: &[(usize, u8)]) -> Grid {
        marks.iter().fold(Grid::new(size), |grid, &(i, id)| {
            grid.with_marker(i, player(id)).unwrap()
        })
    }

    fn line_of(indices: &[usize], id: u8) -> Vec<(usize, u8)> {
        indices.iter().map(|&i| (i, id)).collect()
    }

    #[test]
    fn test_no_winner_empty_grid() {
        for n in 1..8 {
            assert_eq!(check_winner(&Grid::new(n)), None);
        }
    }

    #[test]
    fn test_row_win() {
        let grid = grid_with(5, &line_of(&[0, 1, 2, 3, 4], 2));
        assert_eq!(check_winner(&grid), Some(player(2)));
        assert_eq!(winning_line(&grid), Some((Line::Row(0), player(2))));
    }

    #[test]
    fn test_column_win() {
        let grid = grid_with(5, &line_of(&[0, 5, 10, 15, 20], 3));
        assert_eq!(winning_line(&grid), Some((Line::Column(0), player(3))));
    }

    #[test]
    fn test_main_diagonal_win() {
        let grid = grid_with(5, &line_of(&[0, 6, 12, 18, 24], 1));
        assert_eq!(winning_line(&grid), Some((Line::MainDiagonal, player(1))));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let grid = grid_with(5, &line_of(&[4, 8, 12, 16, 20], 4));
        assert_eq!(winning_line(&grid), Some((Line::AntiDiagonal, player(4))));
    }

    #[test]
    fn test_incomplete_row_with_gap() {
        let grid = grid_with(5, &line_of(&[0, 1, 2, 3], 2));
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_row_with_one_differing_cell() {
        let mut marks = line_of(&[5, 6, 7, 8], 1);
        marks.push((9, 2));
        assert_eq!(check_winner(&grid_with(5, &marks)), None);
    }

    #[test]
    fn test_scan_order_prefers_rows_then_columns() {
        // Rows 1 and 4 are both complete; the lower row is reported.
        let mut marks = line_of(&[20, 21, 22, 23, 24], 3);
        marks.extend(line_of(&[5, 6, 7, 8, 9], 2));
        let grid = grid_with(5, &marks);
        assert_eq!(winning_line(&grid), Some((Line::Row(1), player(2))));

        let mut marks = line_of(&[1, 6, 11, 16, 21], 4);
        marks.extend(line_of(&[2, 7, 12, 17, 22], 3));
        let grid = grid_with(5, &marks);
        assert_eq!(winning_line(&grid), Some((Line::Column(1), player(4))));
    }

    #[test]
    fn test_main_diagonal_before_anti_diagonal() {
        // On an even grid the diagonals are disjoint and can both be complete.
        let mut marks = line_of(&[0, 5, 10, 15], 1);
        marks.extend(line_of(&[3, 6, 9, 12], 2));
        let grid = grid_with(4, &marks);
        assert_eq!(winning_line(&grid), Some((Line::MainDiagonal, player(1))));
    }

    #[test]
    fn test_three_by_three() {
        let grid = grid_with(3, &[(2, 1), (4, 1), (6, 1)]);
        assert_eq!(winning_line(&grid), Some((Line::AntiDiagonal, player(1))));
    }

    #[test]
    fn test_line_past_grid_has_no_winner() {
        let grid = grid_with(3, &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(line_winner(&grid, [0, 1, 2].into_iter()), Some(player(1)));
        assert_eq!(line_winner(&grid, [0, 1, 9].into_iter()), None);
        assert_eq!(line_winner(&grid, [42].into_iter()), None);
    }
}
