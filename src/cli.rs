//! Command-line interface for the Gomoku window.

use std::path::PathBuf;

use clap::Parser;

use gomoku::GameSettings;

/// Connect-K board game (Gomoku by default)
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Play connect-K (Gomoku) on an NxN board", long_about = None)]
#[command(version, allow_negative_numbers = true)]
pub struct Cli {
    /// TOML config file; defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board size N (at least 5)
    #[arg(long)]
    pub board_size: Option<i32>,

    /// Stones in a row needed to win (3 to N)
    #[arg(long)]
    pub win_count: Option<i32>,

    /// Disable undo
    #[arg(long)]
    pub no_undo: bool,

    /// Refuse undo once the game is longer than this (0 = no limit)
    #[arg(long)]
    pub max_undo_steps: Option<i32>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded settings.
    pub fn apply(&self, settings: &mut GameSettings) {
        if let Some(size) = self.board_size {
            settings.board_size = size;
        }
        if let Some(count) = self.win_count {
            settings.win_count = count;
        }
        if self.no_undo {
            settings.allow_undo = false;
        }
        if let Some(steps) = self.max_undo_steps {
            settings.max_undo_steps = steps;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::parse_from(["gomoku", "--board-size", "9", "--win-count", "4", "--no-undo"]);
        let mut settings = GameSettings::default();
        cli.apply(&mut settings);
        assert_eq!(settings.board_size, 9);
        assert_eq!(settings.win_count, 4);
        assert!(!settings.allow_undo);
        assert_eq!(settings.max_undo_steps, 1000);
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let cli = Cli::parse_from(["gomoku"]);
        let mut settings = GameSettings::new(7, 3);
        cli.apply(&mut settings);
        assert_eq!(settings, GameSettings::new(7, 3));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_negative_undo_steps_parse_then_fail_validation() {
        let cli = Cli::parse_from(["gomoku", "--max-undo-steps", "-1"]);
        let mut settings = GameSettings::default();
        cli.apply(&mut settings);
        assert!(settings.validate().is_err());
    }
}
