//! Board representation for connect-K games

pub mod board;


use std::fmt;

// Re-exports
pub use board::Board;

/// Stone colors. `Empty` doubles as "no player" for winners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

/// Position on the board, 0-based.
///
/// Ordering is row-major, matching the order of [`Board::available_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a position from signed coordinates, rejecting anything outside
    /// a `size`x`size` board.
    #[inline]
    pub fn checked(row: i32, col: i32, size: usize) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < size && col < size).then_some(Self { row, col })
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    /// Step one cell along `(dr, dc)`, staying inside a `size`x`size` board.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Self { row, col })
    }

    pub fn to_tuple(self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One accepted placement in the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Stone,
    pub pos: Pos,
    /// 1-based sequence number within the current game
    pub number: usize,
}

impl Move {
    pub fn new(player: Stone, pos: Pos, number: usize) -> Self {
        Self { player, pos, number }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move {}: {} at {}", self.number, self.player, self.pos)
    }
}

/// Snapshot of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// `Stone::Empty` on a draw
    pub winner: Stone,
    pub winning_line: Vec<Pos>,
    pub total_moves: usize,
    pub is_draw: bool,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_draw {
            write!(f, "Draw after {} moves", self.total_moves)
        } else {
            write!(f, "{} wins after {} moves", self.winner, self.total_moves)
        }
    }
}
