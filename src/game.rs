//! Game controller: command API, derived game state and event dispatch.
//!
//! [`GameController`] wraps exactly one [`Board`]. Commands are checked
//! against the current [`GameState`] before they reach the board, and every
//! accepted command reports what happened through at most three callbacks:
//!
//! 1. `on_move_made(player, pos)` for each accepted placement
//! 2. `on_state_change(state)` when the state is (re)entered
//! 3. `on_game_over(result)` after the state change that ends a game
//!
//! Each callback slot holds a single handler; registering again replaces it.
//! Handlers run synchronously inside the command and must not call back into
//! the controller.

use std::fmt;

use tracing::{info, instrument, warn};

use crate::board::{Board, GameResult, Move, Pos, Stone};
use crate::error::Result;
use crate::settings::GameSettings;

/// High-level state of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    #[default]
    NotStarted,
    Playing,
    BlackWin,
    WhiteWin,
    Draw,
    /// Never entered by the controller itself; kept so front ends can show it.
    Paused,
}

impl GameState {
    /// Win or draw.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::BlackWin | GameState::WhiteWin | GameState::Draw)
    }

    fn from_board(board: &Board) -> Self {
        if !board.is_over() {
            return GameState::Playing;
        }
        match board.winner() {
            Stone::Black => GameState::BlackWin,
            Stone::White => GameState::WhiteWin,
            Stone::Empty => GameState::Draw,
        }
    }
}

pub type StateChangeHandler = Box<dyn FnMut(GameState)>;
pub type MoveMadeHandler = Box<dyn FnMut(Stone, Pos)>;
pub type GameOverHandler = Box<dyn FnMut(GameResult)>;

/// One slot per event type. `None` leaves the event unobserved.
#[derive(Default)]
pub struct EventHandlers {
    pub on_state_change: Option<StateChangeHandler>,
    pub on_move_made: Option<MoveMadeHandler>,
    pub on_game_over: Option<GameOverHandler>,
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("on_state_change", &self.on_state_change.is_some())
            .field("on_move_made", &self.on_move_made.is_some())
            .field("on_game_over", &self.on_game_over.is_some())
            .finish()
    }
}

/// Drives one game on one board.
#[derive(Debug)]
pub struct GameController {
    board: Board,
    state: GameState,
    handlers: EventHandlers,
}

impl GameController {
    /// Build a controller in `NotStarted`. Fails on invalid settings.
    pub fn new(settings: GameSettings) -> Result<Self> {
        let board = Board::new(settings)?;
        info!("game controller initialised");
        Ok(Self {
            board,
            state: GameState::NotStarted,
            handlers: EventHandlers::default(),
        })
    }

    // ── Commands ────────────────────────────────────────────────

    /// Start a new game from any state.
    #[instrument(skip(self), fields(from = %self.state))]
    pub fn start_game(&mut self) {
        self.begin();
        info!("game started");
    }

    /// Same effect as [`start_game`](Self::start_game).
    #[instrument(skip(self), fields(from = %self.state))]
    pub fn restart_game(&mut self) {
        self.begin();
        info!("game restarted");
    }

    fn begin(&mut self) {
        self.board.reset();
        self.state = GameState::Playing;
        self.emit_state_change();
    }

    /// Place a stone for the player to move.
    ///
    /// Only accepted while `Playing`. Returns `false` and changes nothing if
    /// the game is in any other state or the board rejects the move.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn make_move(&mut self, row: i32, col: i32) -> bool {
        if self.state != GameState::Playing {
            warn!("move rejected, game is not in progress");
            return false;
        }
        if !self.board.make_move(row, col) {
            return false;
        }

        self.state = GameState::from_board(&self.board);
        if let Some(last) = self.board.last_move().copied() {
            self.emit_move_made(last.player, last.pos);
        }
        if self.state.is_terminal() {
            info!(state = %self.state, "game over");
            self.emit_state_change();
            if let Some(result) = self.board.game_result() {
                self.emit_game_over(result);
            }
        }
        true
    }

    /// Take back the last move. Only accepted while `Playing`.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn undo_move(&mut self) -> bool {
        if self.state != GameState::Playing {
            warn!("undo rejected, game is not in progress");
            return false;
        }
        if !self.board.undo_move() {
            return false;
        }

        self.state = GameState::Playing;
        info!("undo accepted");
        self.emit_state_change();
        true
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn current_player(&self) -> Stone {
        self.board.current_player()
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Bounds-checked cell read; `OutOfRange` outside the board.
    pub fn get_cell(&self, row: i32, col: i32) -> Result<Stone> {
        self.board.get_cell(row, col)
    }

    pub fn is_position_valid(&self, row: i32, col: i32) -> bool {
        self.board.is_valid_move(row, col)
    }

    /// Copy of the grid, one `Vec` per row.
    pub fn board_state(&self) -> Vec<Vec<Stone>> {
        self.board.board_state()
    }

    pub fn available_moves(&self) -> Vec<Pos> {
        self.board.available_moves()
    }

    pub fn game_result(&self) -> Option<GameResult> {
        self.board.game_result()
    }

    pub fn move_history(&self) -> &[Move] {
        self.board.history()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.board.last_move()
    }

    pub fn settings(&self) -> &GameSettings {
        self.board.settings()
    }

    /// Read-only view of the underlying board
    pub fn board(&self) -> &Board {
        &self.board
    }

    // ── Events ──────────────────────────────────────────────────

    /// Replace all three handlers at once.
    pub fn set_event_handlers(&mut self, handlers: EventHandlers) {
        self.handlers = handlers;
        info!(handlers = ?self.handlers, "event handlers set");
    }

    pub fn on_state_change(&mut self, handler: impl FnMut(GameState) + 'static) {
        self.handlers.on_state_change = Some(Box::new(handler));
    }

    pub fn on_move_made(&mut self, handler: impl FnMut(Stone, Pos) + 'static) {
        self.handlers.on_move_made = Some(Box::new(handler));
    }

    pub fn on_game_over(&mut self, handler: impl FnMut(GameResult) + 'static) {
        self.handlers.on_game_over = Some(Box::new(handler));
    }

    fn emit_state_change(&mut self) {
        let state = self.state;
        if let Some(handler) = self.handlers.on_state_change.as_mut() {
            handler(state);
        }
    }

    fn emit_move_made(&mut self, player: Stone, pos: Pos) {
        if let Some(handler) = self.handlers.on_move_made.as_mut() {
            handler(player, pos);
        }
    }

    fn emit_game_over(&mut self, result: GameResult) {
        if let Some(handler) = self.handlers.on_game_over.as_mut() {
            handler(result);
        }
    }
}

impl fmt::Display for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game state: {}", self.state)?;
        write!(f, "{}", self.board)
    }
}
