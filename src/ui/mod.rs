//! GUI module for the Gomoku game
//!
//! A native egui/eframe front end. It only talks to the rule engine through
//! the [`GameController`](crate::GameController) commands, queries and
//! events.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::GomokuApp;
pub use session::{GameSession, UiEvent};
