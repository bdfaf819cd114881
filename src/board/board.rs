//! Board structure with move history and win/draw tracking

use std::fmt;

use tracing::{debug, info, warn};

use super::{GameResult, Move, Pos, Stone};
use crate::error::{GameError, Result};
use crate::rules::{find_winning_line, invariants, is_full};
use crate::settings::GameSettings;

/// Game board for one connect-K game.
///
/// Cells are stored row-major. The board owns its settings for its whole
/// lifetime; [`Board::reset`] clears the position but keeps them.
#[derive(Debug, Clone)]
pub struct Board {
    settings: GameSettings,
    size: usize,
    win_count: usize,
    cells: Vec<Stone>,
    history: Vec<Move>,
    current_player: Stone,
    /// `Stone::Empty` until someone completes a line
    winner: Stone,
    winning_line: Vec<Pos>,
    is_over: bool,
}

impl Board {
    /// Validate `settings` and build an empty board with Black to move.
    pub fn new(settings: GameSettings) -> Result<Self> {
        settings.validate()?;
        // validate() guarantees both are at least 3
        let size = settings.board_size as usize;
        let win_count = settings.win_count as usize;

        info!(size, win_count, "board initialised");
        Ok(Self {
            settings,
            size,
            win_count,
            cells: vec![Stone::Empty; size * size],
            history: Vec::with_capacity(size * size),
            current_player: Stone::Black,
            winner: Stone::Empty,
            winning_line: Vec::with_capacity(win_count),
            is_over: false,
        })
    }

    /// Clear the position in place. Settings are kept as they are.
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.history.clear();
        self.current_player = Stone::Black;
        self.winner = Stone::Empty;
        self.winning_line.clear();
        self.is_over = false;

        info!("board reset");
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_count(&self) -> usize {
        self.win_count
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn winner(&self) -> Stone {
        self.winner
    }

    /// Exactly `win_count` positions once someone has won, empty otherwise.
    pub fn winning_line(&self) -> &[Pos] {
        &self.winning_line
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    /// Stone at an already-constructed position, `None` if off the board.
    #[inline]
    pub fn stone(&self, pos: Pos) -> Option<Stone> {
        if pos.row < self.size && pos.col < self.size {
            self.cells.get(pos.to_index(self.size)).copied()
        } else {
            None
        }
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    /// Bounds-checked cell read.
    pub fn get_cell(&self, row: i32, col: i32) -> Result<Stone> {
        let pos = Pos::checked(row, col, self.size).ok_or(GameError::OutOfRange {
            row,
            col,
            size: self.size,
        })?;
        Ok(self.cells[pos.to_index(self.size)])
    }

    /// In bounds and empty. Out-of-range coordinates are simply invalid.
    pub fn is_valid_move(&self, row: i32, col: i32) -> bool {
        matches!(self.get_cell(row, col), Ok(Stone::Empty))
    }

    /// Place a stone for the player to move.
    pub fn make_move(&mut self, row: i32, col: i32) -> bool {
        self.make_move_as(row, col, self.current_player)
    }

    /// Place a stone for `player`.
    ///
    /// Returns `false` without touching anything if the game is over, the
    /// cell is occupied or off the board, or `player` is `Stone::Empty`.
    /// Every accepted placement returns `true`, including the one that ends
    /// the game.
    pub fn make_move_as(&mut self, row: i32, col: i32, player: Stone) -> bool {
        if self.is_over {
            warn!(row, col, "game is already over, move rejected");
            return false;
        }
        if !player.is_player() {
            warn!(row, col, "no player given for move");
            return false;
        }
        let pos = match Pos::checked(row, col, self.size) {
            Some(pos) if self.cells[pos.to_index(self.size)] == Stone::Empty => pos,
            _ => {
                warn!(row, col, "invalid move position");
                return false;
            }
        };

        self.cells[pos.to_index(self.size)] = player;
        let record = Move::new(player, pos, self.history.len() + 1);
        self.history.push(record);
        info!(%player, row, col, number = record.number, "stone placed");

        if let Some(line) = find_winning_line(self, pos, player) {
            self.winner = player;
            self.winning_line = line;
            self.is_over = true;
            info!(winner = %player, "game won");
        } else if is_full(self) {
            self.is_over = true;
            info!("game drawn, board is full");
        } else {
            self.current_player = player.opponent();
        }

        debug_assert!(invariants::holds(self), "board invariants violated after move");
        true
    }

    /// Take back the last move.
    ///
    /// Refused when undo is disabled, nothing has been played, or the history
    /// is already longer than the configured bound.
    pub fn undo_move(&mut self) -> bool {
        if !self.settings.allow_undo {
            warn!("undo is disabled");
            return false;
        }
        if let Some(limit) = self.settings.undo_limit() {
            if self.history.len() > limit {
                warn!(limit, moves = self.history.len(), "undo limit exceeded");
                return false;
            }
        }
        let Some(last) = self.history.pop() else {
            warn!("no moves to undo");
            return false;
        };

        self.cells[last.pos.to_index(self.size)] = Stone::Empty;
        self.winner = Stone::Empty;
        self.winning_line.clear();
        self.is_over = false;
        self.current_player = last.player;

        info!(player = %last.player, row = last.pos.row, col = last.pos.col, "move undone");
        debug_assert!(invariants::holds(self), "board invariants violated after undo");
        true
    }

    /// Copy of the grid, one `Vec` per row.
    pub fn board_state(&self) -> Vec<Vec<Stone>> {
        self.cells.chunks(self.size).map(<[Stone]>::to_vec).collect()
    }

    /// Empty cells in row-major order. Recomputed on every call.
    pub fn available_moves(&self) -> Vec<Pos> {
        let moves: Vec<Pos> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, stone)| **stone == Stone::Empty)
            .map(|(idx, _)| Pos::from_index(idx, self.size))
            .collect();
        debug!(count = moves.len(), "available moves computed");
        moves
    }

    /// Result snapshot, `None` while the game is still running.
    pub fn game_result(&self) -> Option<GameResult> {
        if !self.is_over {
            return None;
        }
        Some(GameResult {
            winner: self.winner,
            winning_line: self.winning_line.clone(),
            total_moves: self.history.len(),
            is_draw: self.winner == Stone::Empty && is_full(self),
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board: {}x{}, {} to win", self.size, self.size, self.win_count)?;
        writeln!(f, "Current player: {}", self.current_player)?;
        writeln!(f, "Status: {}", if self.is_over { "over" } else { "in progress" })?;
        if self.is_over {
            if self.winner.is_player() {
                writeln!(f, "Winner: {}", self.winner)?;
            } else {
                writeln!(f, "Draw")?;
            }
        }
        write!(f, "Moves: {}", self.history.len())
    }
}
