//! Board invariants.
//!
//! Each check logs a warning when it fails. The board asserts [`holds`] in
//! debug builds after every mutation.

use tracing::warn;

use super::draw::is_full;
use super::win::Axis;
use crate::board::{Board, Pos, Stone};

/// Occupied cells and history entries match one to one.
pub fn history_matches_stones(board: &Board) -> bool {
    let stones = board.stone_count();
    let history_len = board.history().len();
    let matches = stones == history_len
        && board
            .history()
            .iter()
            .all(|m| board.stone(m.pos) == Some(m.player));
    if !matches {
        warn!(stones, history_len, "history does not match stones on board");
    }
    matches
}

/// A winner implies a finished game and a straight, contiguous line of
/// exactly `win_count` of the winner's stones.
pub fn winning_line_valid(board: &Board) -> bool {
    let winner = board.winner();
    if !winner.is_player() {
        return board.winning_line().is_empty();
    }

    let line = board.winning_line();
    let valid = board.is_over()
        && line.len() == board.win_count()
        && line.iter().all(|&p| board.stone(p) == Some(winner))
        && is_straight(line, board.size());
    if !valid {
        warn!(%winner, len = line.len(), "winning line is inconsistent");
    }
    valid
}

/// Consecutive positions are one step apart along a single axis.
fn is_straight(line: &[Pos], size: usize) -> bool {
    let Some((&first, rest)) = line.split_first() else {
        return false;
    };
    Axis::ALL.iter().any(|axis| {
        let (dr, dc) = axis.delta();
        let mut cur = first;
        rest.iter().all(|&next| {
            let step = cur.offset(dr, dc, size);
            cur = next;
            step == Some(next)
        })
    })
}

/// A finished game without a winner leaves no empty cell.
pub fn draw_means_full(board: &Board) -> bool {
    let valid = !(board.is_over() && board.winner() == Stone::Empty) || is_full(board);
    if !valid {
        warn!("game ended without a winner on a board with empty cells");
    }
    valid
}

/// All board invariants.
pub fn holds(board: &Board) -> bool {
    history_matches_stones(board) && winning_line_valid(board) && draw_means_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameSettings;

    #[test]
    fn test_fresh_board_holds() {
        let board = Board::new(GameSettings::default()).unwrap();
        assert!(holds(&board));
    }

    #[test]
    fn test_holds_through_a_won_game() {
        let mut board = Board::new(GameSettings::new(5, 3)).unwrap();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            assert!(board.make_move(r, c));
            assert!(holds(&board));
        }
        assert!(board.is_over());
        assert!(board.undo_move());
        assert!(holds(&board));
    }

    #[test]
    fn test_straight_lines() {
        let row = [Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)];
        let anti = [Pos::new(0, 4), Pos::new(1, 3), Pos::new(2, 2)];
        let bent = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)];
        let gap = [Pos::new(0, 0), Pos::new(0, 2), Pos::new(0, 3)];
        assert!(is_straight(&row, 5));
        assert!(is_straight(&anti, 5));
        assert!(!is_straight(&bent, 5));
        assert!(!is_straight(&gap, 5));
        assert!(!is_straight(&[], 5));
    }
}
