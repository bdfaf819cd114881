//! Game rules for connect-K
//!
//! This module implements the rule set:
//! - Win detection around the last placed stone
//! - Draw detection (full board)
//! - Board invariant checks

pub mod draw;
pub mod invariants;
pub mod win;

// Re-exports for convenient access
pub use draw::is_full;
pub use win::{find_winning_line, Axis};
