//! Win condition checking
//!
//! A player wins by completing `win_count` stones in a row through the stone
//! just placed. Only that stone is examined, so a scan costs O(K) per axis no
//! matter how large the board is.

use tracing::debug;

use crate::board::{Board, Pos, Stone};

/// The four lines through a cell, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Top-right to bottom-left
    DiagonalUp,
}

impl Axis {
    /// Scan order. The first axis to reach the threshold wins.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Forward step as (row, col) deltas.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// Walk from `from` along `(dr, dc)` while the stones match, at most `limit`
/// steps.
fn run(board: &Board, from: Pos, (dr, dc): (isize, isize), player: Stone, limit: usize) -> Vec<Pos> {
    let mut out = Vec::with_capacity(limit);
    let mut cur = from;
    while out.len() < limit {
        match cur.offset(dr, dc, board.size()) {
            Some(next) if board.stone(next) == Some(player) => {
                out.push(next);
                cur = next;
            }
            _ => break,
        }
    }
    out
}

/// Find the line `player` completed by playing at `pos`.
///
/// Returns exactly `win_count` positions ordered along the axis, or `None`.
/// When several axes complete at once the earliest in [`Axis::ALL`] is
/// reported.
pub fn find_winning_line(board: &Board, pos: Pos, player: Stone) -> Option<Vec<Pos>> {
    if !player.is_player() {
        return None;
    }
    let k = board.win_count();

    for axis in Axis::ALL {
        let (dr, dc) = axis.delta();
        let backward = run(board, pos, (-dr, -dc), player, k - 1);
        let forward = run(board, pos, (dr, dc), player, k - 1);

        if backward.len() + 1 + forward.len() >= k {
            let mut line: Vec<Pos> = backward.into_iter().rev().collect();
            line.push(pos);
            line.extend(forward);
            line.truncate(k);
            debug!(%axis, %player, "winning line found");
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameSettings;

    fn board(size: i32, k: i32) -> Board {
        Board::new(GameSettings::new(size, k)).unwrap()
    }

    fn put(board: &mut Board, cells: &[(i32, i32)], player: Stone) {
        for &(r, c) in cells {
            assert!(board.make_move_as(r, c, player));
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut b = board(15, 5);
        put(&mut b, &[(7, 0), (7, 1), (7, 3), (7, 4)], Stone::Black);
        put(&mut b, &[(7, 2)], Stone::Black);
        let line = find_winning_line(&b, Pos::new(7, 2), Stone::Black).unwrap();
        assert_eq!(line, (0..5).map(|c| Pos::new(7, c)).collect::<Vec<_>>());
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut b = board(15, 5);
        put(&mut b, &[(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)], Stone::White);
        assert_eq!(b.winner(), Stone::White);
        assert_eq!(b.winning_line().first(), Some(&Pos::new(0, 9)));
        assert_eq!(b.winning_line().last(), Some(&Pos::new(4, 9)));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut b = board(15, 5);
        put(&mut b, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Stone::White);
        assert_eq!(b.winner(), Stone::White);
        assert_eq!(b.winning_line().len(), 5);
    }

    #[test]
    fn test_diagonal_up_five() {
        let mut b = board(15, 5);
        // Diagonal from (4, 8) to (8, 4)
        put(&mut b, &[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)], Stone::Black);
        assert_eq!(b.winner(), Stone::Black);
        assert_eq!(
            b.winning_line(),
            &[Pos::new(4, 8), Pos::new(5, 7), Pos::new(6, 6), Pos::new(7, 5), Pos::new(8, 4)]
        );
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut b = board(15, 5);
        put(&mut b, &[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::Black);
        assert!(!b.is_over());
        assert!(find_winning_line(&b, Pos::new(9, 3), Stone::Black).is_none());
    }

    #[test]
    fn test_overline_truncated_to_k() {
        let mut b = board(15, 5);
        put(&mut b, &[(9, 0), (9, 1), (9, 2), (9, 4), (9, 5)], Stone::Black);
        assert!(!b.is_over());
        // Joins two runs into six stones
        put(&mut b, &[(9, 3)], Stone::Black);
        assert_eq!(b.winning_line().len(), 5);
        assert!(b.winning_line().contains(&Pos::new(9, 3)));
        assert!(b.winning_line().windows(2).all(|w| w[1].col == w[0].col + 1));
    }

    #[test]
    fn test_five_at_corner() {
        let mut b = board(15, 5);
        put(&mut b, &[(10, 10), (11, 11), (12, 12), (13, 13), (14, 14)], Stone::White);
        assert_eq!(b.winner(), Stone::White);
        assert!(b.winning_line().iter().all(|p| p.row < 15 && p.col < 15));
    }

    #[test]
    fn test_horizontal_wins_tie_break() {
        let mut b = board(15, 5);
        // Horizontal and vertical both complete through (7, 7)
        put(&mut b, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        put(&mut b, &[(3, 7), (4, 7), (5, 7), (6, 7)], Stone::Black);
        put(&mut b, &[(7, 7)], Stone::Black);
        assert!(b.winning_line().iter().all(|p| p.row == 7));
    }

    #[test]
    fn test_other_color_breaks_run() {
        let mut b = board(5, 3);
        put(&mut b, &[(0, 0)], Stone::Black);
        put(&mut b, &[(0, 1)], Stone::White);
        put(&mut b, &[(0, 2)], Stone::Black);
        assert!(!b.is_over());
    }

    #[test]
    fn test_empty_player_never_wins() {
        let b = board(5, 3);
        assert!(find_winning_line(&b, Pos::new(0, 0), Stone::Empty).is_none());
    }

    #[test]
    fn test_axis_order() {
        use strum::IntoEnumIterator;
        assert_eq!(Axis::iter().collect::<Vec<_>>(), Axis::ALL.to_vec());
        assert_eq!(Axis::DiagonalUp.delta(), (1, -1));
    }
}
