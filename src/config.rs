//! Console front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the console game, loaded from TOML.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown for Player 1 (cubes, `X`).
    #[serde(default = "default_player_one_name")]
    player_one_name: String,

    /// Name shown for Player 2 (cylinders, `O`).
    #[serde(default = "default_player_two_name")]
    player_two_name: String,

    /// Print the board after every accepted placement.
    #[serde(default = "default_show_board")]
    show_board_after_move: bool,
}

fn default_player_one_name() -> String {
    "Player 1".to_string()
}

fn default_player_two_name() -> String {
    "Player 2".to_string()
}

fn default_show_board() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_name: default_player_one_name(),
            player_two_name: default_player_two_name(),
            show_board_after_move: default_show_board(),
        }
    }
}

impl GameConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_one = %config.player_one_name,
            player_two = %config.player_two_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Display name for `player`.
    pub fn name_of(&self, player: crate::Player) -> &str {
        match player {
            crate::Player::PlayerOne => &self.player_one_name,
            crate::Player::PlayerTwo => &self.player_two_name,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
