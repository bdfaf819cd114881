//! Front-end side of one game: the controller plus the events it reported.

use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::{debug, info};

use crate::{GameController, GameError, GameResult, GameSettings, GameState, Pos, Stone};

/// Events recorded in the side panel
const EVENT_LOG_LEN: usize = 8;

/// Controller notification forwarded to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    StateChanged(GameState),
    MoveMade(Stone, Pos),
    GameOver(GameResult),
}

impl UiEvent {
    fn describe(&self) -> String {
        match self {
            UiEvent::StateChanged(state) => format!("state -> {state}"),
            UiEvent::MoveMade(player, pos) => format!("{player} at {pos}"),
            UiEvent::GameOver(result) => result.to_string(),
        }
    }
}

/// Game controller wired to an event channel.
///
/// The controller's callbacks only push into the channel; the UI drains it
/// once per frame with [`GameSession::drain_events`].
pub struct GameSession {
    controller: GameController,
    events: Receiver<UiEvent>,
    log: VecDeque<String>,
    /// Last message for the player, e.g. a rejected move
    pub message: Option<String>,
}

impl GameSession {
    /// Build the controller, register its handlers and start the first game.
    pub fn new(settings: GameSettings) -> Result<Self, GameError> {
        let mut controller = GameController::new(settings)?;
        let (tx, rx) = channel();
        register_handlers(&mut controller, tx);
        controller.start_game();

        Ok(Self {
            controller,
            events: rx,
            log: VecDeque::with_capacity(EVENT_LOG_LEN),
            message: None,
        })
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Place a stone at `pos`. Returns whether the controller accepted it.
    pub fn try_place_stone(&mut self, pos: Pos) -> bool {
        let accepted = self.controller.make_move(pos.row as i32, pos.col as i32);
        if accepted {
            self.message = None;
        }
        accepted
    }

    pub fn new_game(&mut self) {
        self.controller.start_game();
        self.message = None;
    }

    pub fn restart(&mut self) {
        self.controller.restart_game();
        self.message = None;
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.controller.undo_move();
        if undone {
            self.message = None;
        }
        undone
    }

    /// Pull every pending controller event into the log, returning them in
    /// the order they fired.
    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        let drained: Vec<UiEvent> = self.events.try_iter().collect();
        for event in &drained {
            debug!(?event, "ui event");
            if self.log.len() == EVENT_LOG_LEN {
                self.log.pop_front();
            }
            self.log.push_back(event.describe());
        }
        drained
    }

    /// Recent events, oldest first.
    pub fn event_log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }
}

fn register_handlers(controller: &mut GameController, tx: Sender<UiEvent>) {
    // A send only fails once the session (and its receiver) is gone.
    let state_tx = tx.clone();
    controller.on_state_change(move |state| {
        let _ = state_tx.send(UiEvent::StateChanged(state));
    });
    let move_tx = tx.clone();
    controller.on_move_made(move |player, pos| {
        let _ = move_tx.send(UiEvent::MoveMade(player, pos));
    });
    controller.on_game_over(move |result| {
        info!(%result, "game over");
        let _ = tx.send(UiEvent::GameOver(result));
    });
}
