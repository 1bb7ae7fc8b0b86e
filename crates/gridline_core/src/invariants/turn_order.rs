//! Turn order invariant: the turn follows round-robin from player 1.

use super::Invariant;
use crate::{Game, GameStatus};

/// Invariant: the turn is consistent with the number of markers placed.
///
/// With `t` markers on the grid and `p` players, a game in progress has
/// player `t mod p + 1` to move. A won game keeps the turn on the
/// winner, who placed the last marker.
pub struct TurnOrderInvariant;

impl Invariant<Game> for TurnOrderInvariant {
    const DESCRIPTION: &'static str = "Turn follows round-robin order from player 1";

    fn holds(game: &Game) -> bool {
        let players = usize::from(*game.config().player_count());
        let placed = game.grid().occupied_count();
        let turn = usize::from(game.turn().get());

        if turn == 0 || turn > players {
            return false;
        }

        match game.status() {
            GameStatus::InProgress => turn == placed % players + 1,
            GameStatus::Won(winner) => {
                placed > 0 && winner == game.turn() && turn == (placed - 1) % players + 1
            }
        }
    }
}
