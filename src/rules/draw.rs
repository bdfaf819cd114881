//! Draw detection

use crate::board::{Board, Stone};

/// True when no empty cell is left.
///
/// Only meaningful as a draw when the last move did not win.
pub fn is_full(board: &Board) -> bool {
    !board.cells().contains(&Stone::Empty)
}
