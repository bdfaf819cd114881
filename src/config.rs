//! TOML configuration for the desktop front end.
//!
//! Every key is optional:
//!
//! ```toml
//! [game]
//! board_size = 15
//! win_count = 5
//! allow_undo = true
//! max_undo_steps = 1000
//!
//! [window]
//! title = "Gomoku"
//! width = 1000.0
//! height = 750.0
//!
//! [text]
//! black_turn = "Black to move"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::settings::GameSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameSettings,
    pub window: WindowConfig,
    pub text: TextConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
    /// Space between the board edge and the outer grid lines
    pub board_margin: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Gomoku".to_string(),
            width: 1000.0,
            height: 750.0,
            min_width: 800.0,
            min_height: 600.0,
            board_margin: 40.0,
        }
    }
}

/// Labels shown by the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub new_game: String,
    pub restart: String,
    pub undo: String,
    pub quit: String,
    pub black_turn: String,
    pub white_turn: String,
    pub black_win: String,
    pub white_win: String,
    pub draw: String,
    pub not_started: String,
    pub paused: String,
    pub invalid_move: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            new_game: "New Game".to_string(),
            restart: "Restart".to_string(),
            undo: "Undo".to_string(),
            quit: "Quit".to_string(),
            black_turn: "Black to move".to_string(),
            white_turn: "White to move".to_string(),
            black_win: "Black wins!".to_string(),
            white_win: "White wins!".to_string(),
            draw: "Draw!".to_string(),
            not_started: "Game not started".to_string(),
            paused: "Game paused".to_string(),
            invalid_move: "Invalid move".to_string(),
        }
    }
}

impl AppConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate config text that did not come from a file.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, Path::new("<inline>"))
    }

    fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(origin),
            source,
        })?;
        config.game.validate()?;
        debug!(settings = ?config.game, "config parsed");
        Ok(config)
    }
}
