//! Marker balance invariant: markers are spread as round-robin play leaves them.

use super::Invariant;
use crate::{Game, PlayerId};

/// Invariant: after `t` placements, player `k` holds exactly as many markers
/// as there are indices `i < t` with `i mod p == k - 1`, and nobody outside
/// the configured players holds any.
pub struct MarkerBalanceInvariant;

impl Invariant<Game> for MarkerBalanceInvariant {
    const DESCRIPTION: &'static str = "Each player holds the markers round-robin play gives them";

    fn holds(game: &Game) -> bool {
        let player_count = *game.config().player_count();
        let players = usize::from(player_count);
        let placed = game.grid().occupied_count();

        let mut accounted = 0;
        for player in PlayerId::all(player_count) {
            let expected = placed / players + usize::from(player.slot() < placed % players);
            let actual = game.grid().count_for(player);
            if actual != expected {
                return false;
            }
            accounted += actual;
        }
        accounted == placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;

    #[test]
    fn test_empty_game_holds() {
        assert!(MarkerBalanceInvariant::holds(&Game::default()));
    }

    #[test]
    fn test_holds_for_partial_rounds() {
        let mut game = Game::new(GameConfig::new(5, 4).unwrap());
        for index in [0, 1, 2, 5, 6, 7] {
            game.place_marker(index).unwrap();
            assert!(MarkerBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_detects_foreign_player() {
        let mut game = Game::new(GameConfig::new(3, 2).unwrap());
        game.place_marker(0).unwrap();
        game.grid = game.grid.with_marker(1, PlayerId::new(7).unwrap()).unwrap();
        assert!(!MarkerBalanceInvariant::holds(&game));
    }
}
