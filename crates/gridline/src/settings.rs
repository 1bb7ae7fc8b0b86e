//! User settings: TOML file plus command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use gridline_core::{ConfigError, GameConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Audio preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Whether cues are played at all.
    enabled: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Everything the front-end needs to start a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid shape and player count.
    game: GameConfig,
    /// Audio preferences.
    audio: AudioSettings,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Builds the session settings: file (if any), then command-line overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let game = GameConfig::new(
            cli.size.unwrap_or(*base.game.grid_size()),
            cli.players.unwrap_or(*base.game.player_count()),
        )?;
        let audio = AudioSettings {
            enabled: base.audio.enabled && !cli.mute,
        };

        info!(
            grid_size = game.grid_size(),
            player_count = game.player_count(),
            audio = audio.enabled,
            "Settings resolved"
        );
        Ok(Self { game, audio })
    }
}
