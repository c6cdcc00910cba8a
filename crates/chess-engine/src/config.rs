//! Game configuration.
//!
//! Loaded from TOML; every field has a default, so an empty file is valid:
//!
//! ```toml
//! # "always" (default) or "once"
//! board_replacement = "once"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Whether [`Game::set_board`](crate::Game::set_board) may replace a board
/// that was already set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardReplacement {
    /// Every call replaces the board.
    #[default]
    Always,
    /// The first call replaces the starting board; later calls fail with
    /// [`GameError::InvalidBoardReplacement`](crate::GameError::InvalidBoardReplacement).
    Once,
}

/// Settings for a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board_replacement: BoardReplacement,
}

impl GameConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded game config");
        Ok(config)
    }
}
