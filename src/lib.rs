//! Connect-K rule engine (Gomoku and friends)
//!
//! Canonical game state for "K in a row on an NxN board" games:
//! - Configurable board size (at least 5) and win length (3 to N)
//! - Move legality, win detection around the last stone, draw on a full board
//! - Bounded undo with a consistent history
//! - A game controller with derived states and event callbacks
//!
//! # Architecture
//!
//! - [`board`]: Grid, move history and turn tracking
//! - [`rules`]: Win scan, draw scan, invariant checks
//! - [`game`]: [`GameController`] state machine and event dispatch
//! - [`settings`]: Validated [`GameSettings`]
//! - [`config`]: TOML configuration for the desktop front end
//! - [`ui`]: egui/eframe front end driving the controller
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameController, GameSettings, GameState, Stone};
//!
//! let mut game = GameController::new(GameSettings::new(5, 3)).unwrap();
//! game.start_game();
//!
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     assert!(game.make_move(row, col));
//! }
//!
//! assert_eq!(game.game_state(), GameState::BlackWin);
//! assert_eq!(game.game_result().unwrap().winner, Stone::Black);
//! ```
//!
//! The core is single-threaded. Callers sharing a controller between threads
//! must serialise every call themselves.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod settings;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, GameResult, Move, Pos, Stone};
pub use error::{ConfigError, GameError, SettingsError};
pub use game::{EventHandlers, GameController, GameState};
pub use settings::GameSettings;
