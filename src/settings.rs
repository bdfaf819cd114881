//! Game settings shared by the board and the controller

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

pub const DEFAULT_BOARD_SIZE: i32 = 15;
pub const DEFAULT_WIN_COUNT: i32 = 5;
pub const DEFAULT_MAX_UNDO_STEPS: i32 = 1000;

/// Rules for one game.
///
/// Numeric fields are signed so that values read from a config file or the
/// command line reach [`GameSettings::validate`] untouched instead of failing
/// to parse. A `max_undo_steps` of 0 leaves undo unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub board_size: i32,
    pub win_count: i32,
    pub allow_undo: bool,
    pub max_undo_steps: i32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_count: DEFAULT_WIN_COUNT,
            allow_undo: true,
            max_undo_steps: DEFAULT_MAX_UNDO_STEPS,
        }
    }
}

impl GameSettings {
    pub fn new(board_size: i32, win_count: i32) -> Self {
        Self {
            board_size,
            win_count,
            ..Self::default()
        }
    }

    pub fn with_undo(mut self, allow_undo: bool, max_undo_steps: i32) -> Self {
        self.allow_undo = allow_undo;
        self.max_undo_steps = max_undo_steps;
        self
    }

    /// Check every rule, reporting the first one broken.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.board_size < 5 {
            return Err(SettingsError::BoardTooSmall {
                size: self.board_size,
            });
        }
        if self.win_count < 3 {
            return Err(SettingsError::WinCountTooSmall {
                count: self.win_count,
            });
        }
        if self.win_count > self.board_size {
            return Err(SettingsError::WinCountTooLarge {
                count: self.win_count,
                size: self.board_size,
            });
        }
        if self.max_undo_steps < 0 {
            return Err(SettingsError::NegativeUndoSteps {
                steps: self.max_undo_steps,
            });
        }
        Ok(())
    }

    /// Undo bound, `None` when unbounded.
    pub fn undo_limit(&self) -> Option<usize> {
        usize::try_from(self.max_undo_steps)
            .ok()
            .filter(|&steps| steps > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert_eq!(settings.board_size, 15);
        assert_eq!(settings.win_count, 5);
        assert!(settings.allow_undo);
        assert_eq!(settings.max_undo_steps, 1000);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_board_too_small() {
        assert_eq!(
            GameSettings::new(4, 3).validate(),
            Err(SettingsError::BoardTooSmall { size: 4 })
        );
    }

    #[test]
    fn test_win_count_too_small() {
        assert_eq!(
            GameSettings::new(15, 2).validate(),
            Err(SettingsError::WinCountTooSmall { count: 2 })
        );
    }

    #[test]
    fn test_win_count_exceeds_board() {
        assert_eq!(
            GameSettings::new(5, 6).validate(),
            Err(SettingsError::WinCountTooLarge { count: 6, size: 5 })
        );
    }

    #[test]
    fn test_negative_undo_steps() {
        let settings = GameSettings::default().with_undo(true, -1);
        assert_eq!(
            settings.validate(),
            Err(SettingsError::NegativeUndoSteps { steps: -1 })
        );
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(GameSettings::new(5, 3).validate().is_ok());
        assert!(GameSettings::new(5, 5).validate().is_ok());
        assert!(GameSettings::default().with_undo(false, 0).validate().is_ok());
    }

    #[test]
    fn test_undo_limit() {
        assert_eq!(GameSettings::default().undo_limit(), Some(1000));
        assert_eq!(GameSettings::default().with_undo(true, 0).undo_limit(), None);
        assert_eq!(GameSettings::default().with_undo(true, 3).undo_limit(), Some(3));
    }
}
