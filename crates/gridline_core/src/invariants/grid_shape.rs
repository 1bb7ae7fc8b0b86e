//! Grid shape invariant: the grid never changes size.

use super::Invariant;
use crate::Game;

/// Invariant: the grid is N-by-N for the configured N and holds exactly N² cells.
pub struct GridShapeInvariant;

impl Invariant<Game> for GridShapeInvariant {
    const DESCRIPTION: &'static str = "Grid holds exactly N² cells for the configured N";

    fn holds(game: &Game) -> bool {
        let n = *game.config().grid_size();
        game.grid().size() == n && game.grid().len() == n * n
    }
}
