//! Game configuration: grid size and player count.

use crate::types::MAX_PLAYERS;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest supported grid side length.
pub const MIN_GRID_SIZE: usize = 3;

/// Largest supported grid side length.
pub const MAX_GRID_SIZE: usize = 64;

/// Reference grid side length.
pub const DEFAULT_GRID_SIZE: usize = 5;

/// Reference player count.
pub const DEFAULT_PLAYER_COUNT: u8 = 4;

/// Shape of one game: an N-by-N grid shared by P players.
///
/// Both [`GameConfig::new`] and deserialization run [`GameConfig::validate`],
/// so a `Game` never sees an unusable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// Side length N of the grid.
    grid_size: usize,
    /// Number of players P.
    player_count: u8,
}

impl GameConfig {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(grid_size: usize, player_count: u8) -> Result<Self, ConfigError> {
        Self {
            grid_size,
            player_count,
        }
        .validate()
    }

    /// Checks the size and player bounds, returning the configuration unchanged.
    #[instrument]
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::new(format!(
                "grid size {} must be between {} and {}",
                self.grid_size, MIN_GRID_SIZE, MAX_GRID_SIZE
            )));
        }
        if !(2..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::new(format!(
                "player count {} must be between 2 and {}",
                self.player_count, MAX_PLAYERS
            )));
        }
        debug!(grid_size = self.grid_size, player_count = self.player_count, "Config valid");
        Ok(self)
    }

    /// Number of cells in the grid, N².
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            player_count: DEFAULT_PLAYER_COUNT,
        }
    }
}

/// Unchecked wire form of [`GameConfig`]; missing fields take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawGameConfig {
    grid_size: usize,
    player_count: u8,
}

impl Default for RawGameConfig {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            grid_size: config.grid_size,
            player_count: config.player_count,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        GameConfig {
            grid_size: raw.grid_size,
            player_count: raw.player_count,
        }
        .validate()
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_game() {
        let config = GameConfig::default();
        assert_eq!(*config.grid_size(), 5);
        assert_eq!(*config.player_count(), 4);
        assert_eq!(config.cell_count(), 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_grid() {
        let err = GameConfig::new(2, 2).unwrap_err();
        assert!(err.message.contains("grid size 2"));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        assert!(GameConfig::new(MAX_GRID_SIZE, 2).is_ok());
        let err = GameConfig::new(MAX_GRID_SIZE + 1, 2).unwrap_err();
        assert!(err.message.contains("must be between"));
        assert!(GameConfig::new(1 << 33, 2).is_err());
    }

    #[test]
    fn test_rejects_player_count_out_of_range() {
        assert!(GameConfig::new(3, 1).is_err());
        assert!(GameConfig::new(3, MAX_PLAYERS + 1).is_err());
        assert!(GameConfig::new(3, MAX_PLAYERS).is_ok());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"grid_size": 7}"#).unwrap();
        assert_eq!(*config.grid_size(), 7);
        assert_eq!(*config.player_count(), DEFAULT_PLAYER_COUNT);
    }

    #[test]
    fn test_deserialize_validates_shape() {
        assert!(serde_json::from_str::<GameConfig>(r#"{"player_count": 0}"#).is_err());
        assert!(serde_json::from_str::<GameConfig>(r#"{"grid_size": 1}"#).is_err());
        assert!(
            serde_json::from_str::<GameConfig>(r#"{"grid_size": 3, "player_count": 1}"#).is_err()
        );
        assert!(serde_json::from_str::<GameConfig>(r#"{"grid_size": 4294967296}"#).is_err());
        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
