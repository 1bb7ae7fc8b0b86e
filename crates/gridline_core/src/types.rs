//! Core domain types for the line game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Largest player count the game supports.
pub const MAX_PLAYERS: u8 = 9;

/// A player, numbered from 1.
///
/// Player ids are totally ordered and used both as cell contents and
/// as the "whose turn" marker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display("Player {}", _0)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who always moves first.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Creates a player id, rejecting zero.
    pub fn new(id: u8) -> Result<Self, InvalidPlayerId> {
        if id == 0 {
            Err(InvalidPlayerId { id })
        } else {
            Ok(Self(id))
        }
    }

    /// Returns the 1-based number of this player.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based slot of this player, handy for palettes and counters.
    pub fn slot(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Returns the player who moves after this one in a game of `player_count` players.
    #[instrument]
    pub fn next(self, player_count: u8) -> Self {
        if self.0 >= player_count {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    /// Iterates over every player in a game of `player_count` players, in turn order.
    pub fn all(player_count: u8) -> impl Iterator<Item = PlayerId> {
        (1..=player_count).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

/// Player ids start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid player id {}: ids start at 1", id)]
pub struct InvalidPlayerId {
    /// The rejected id.
    pub id: u8,
}

/// One addressable grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No marker has been placed here.
    #[default]
    Empty,
    /// A player's marker.
    Occupied(PlayerId),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if no marker is present.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win. Terminal until restart.
    Won(PlayerId),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }

    /// Checks if placements are still accepted.
    pub fn is_in_progress(self) -> bool {
        matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
        }
    }
}

/// Result of a `place_marker` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// The marker was placed and play passes to the next player.
    Continue,
    /// The marker was placed and completed a line.
    Won(PlayerId),
    /// The cell was occupied or the game is already over. Nothing changed.
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_rejects_zero() {
        assert_eq!(PlayerId::new(0), Err(InvalidPlayerId { id: 0 }));
        assert_eq!(PlayerId::new(3).map(PlayerId::get), Ok(3));
    }

    #[test]
    fn test_next_wraps_round_robin() {
        let p = |id| PlayerId::new(id).unwrap();
        assert_eq!(p(1).next(4), p(2));
        assert_eq!(p(3).next(4), p(4));
        assert_eq!(p(4).next(4), p(1));
        assert_eq!(p(2).next(2), p(1));
    }

    #[test]
    fn test_all_lists_players_in_order() {
        let ids: Vec<u8> = PlayerId::all(3).map(PlayerId::get).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_player_id_serde_validates() {
        let player: PlayerId = serde_json::from_str("2").unwrap();
        assert_eq!(player.get(), 2);
        assert!(serde_json::from_str::<PlayerId>("0").is_err());
    }

    #[test]
    fn test_cell_player() {
        let player = PlayerId::FIRST;
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::Occupied(player).player(), Some(player));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_status_display() {
        let won = GameStatus::Won(PlayerId::new(2).unwrap());
        assert_eq!(won.to_string(), "Player 2 wins");
        assert_eq!(won.winner().map(PlayerId::get), Some(2));
        assert!(GameStatus::InProgress.is_in_progress());
    }
}
