//! Error types for the rule engine and its configuration.
//!
//! Only construction with bad settings and out-of-range cell queries are hard
//! errors. Rejected moves and undos are reported as `false` by the commands
//! themselves.

use std::path::PathBuf;

use derive_more::{Display, Error, From};

/// Violated settings rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SettingsError {
    #[display("board size must be at least 5, got {size}")]
    BoardTooSmall { size: i32 },
    #[display("win count must be at least 3, got {count}")]
    WinCountTooSmall { count: i32 },
    #[display("win count {count} exceeds board size {size}")]
    WinCountTooLarge { count: i32, size: i32 },
    #[display("max undo steps cannot be negative, got {steps}")]
    NegativeUndoSteps { steps: i32 },
}

/// Hard errors raised by the board and the controller.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    #[display("invalid settings: {_0}")]
    #[from]
    InvalidSettings(SettingsError),
    #[display("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: i32, col: i32, size: usize },
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Errors loading an [`AppConfig`](crate::config::AppConfig) from disk.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[display("config rejected: {_0}")]
    #[from]
    Invalid(SettingsError),
}
