//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::info;

use super::board_view::BoardView;
use super::session::GameSession;
use super::theme::*;
use crate::config::{AppConfig, TextConfig};
use crate::{GameError, GameState, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    session: GameSession,
    board_view: BoardView,
    text: TextConfig,
}

/// Actions requested through keys, menu or buttons in one frame
#[derive(Debug, Default, Clone, Copy)]
struct Requests {
    new_game: bool,
    restart: bool,
    undo: bool,
    quit: bool,
}

impl GomokuApp {
    /// Create the app and start the first game.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, GameError> {
        let session = GameSession::new(config.game)?;
        let size = session.controller().board().size();
        Ok(Self {
            session,
            board_view: BoardView::new(size, config.window.board_margin),
            text: config.text,
        })
    }

    /// Status line for the current state
    fn status_text(&self) -> &str {
        let game = self.session.controller();
        match game.game_state() {
            GameState::Playing if game.current_player() == Stone::White => &self.text.white_turn,
            GameState::Playing => &self.text.black_turn,
            GameState::BlackWin => &self.text.black_win,
            GameState::WhiteWin => &self.text.white_win,
            GameState::Draw => &self.text.draw,
            GameState::NotStarted => &self.text.not_started,
            GameState::Paused => &self.text.paused,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&self, ctx: &Context, requests: &mut Requests) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button(self.text.new_game.as_str()).clicked() {
                        requests.new_game = true;
                        ui.close_menu();
                    }
                    if ui.button(self.text.restart.as_str()).clicked() {
                        requests.restart = true;
                        ui.close_menu();
                    }
                    if ui.button(self.text.undo.as_str()).clicked() {
                        requests.undo = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button(self.text.quit.as_str()).clicked() {
                        requests.quit = true;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let settings = self.session.controller().settings();
                    ui.label(format!(
                        "{0}x{0}, {1} in a row",
                        settings.board_size, settings.win_count
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&self, ctx: &Context, requests: &mut Requests) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui, requests);
                ui.add_space(10.0);

                if let Some(result) = self.session.controller().game_result() {
                    self.render_game_over_card(ui, &result.to_string());
                    ui.add_space(10.0);
                }

                self.render_event_card(ui);

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Turn or outcome, plus the move counter
    fn render_status_card(&self, ui: &mut egui::Ui) {
        let game = self.session.controller();
        let color = match game.game_state() {
            GameState::Playing => STATUS_PLAYING,
            GameState::BlackWin | GameState::WhiteWin | GameState::Draw => WIN_HIGHLIGHT,
            GameState::NotStarted | GameState::Paused => STATUS_WARNING,
        };

        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                if game.game_state() == GameState::Playing {
                    let (rect, _) = ui.allocate_exact_size(Vec2::new(36.0, 36.0), egui::Sense::hover());
                    let fill = match game.current_player() {
                        Stone::White => WHITE_STONE,
                        _ => BLACK_STONE,
                    };
                    ui.painter().circle_filled(rect.center(), 15.0, fill);
                    ui.painter().circle_stroke(rect.center(), 15.0, egui::Stroke::new(1.0, TEXT_MUTED));
                    ui.add_space(8.0);
                }
                ui.vertical(|ui| {
                    ui.label(RichText::new(self.status_text()).size(18.0).strong().color(color));
                    ui.label(
                        RichText::new(format!("Move #{}", game.move_history().len()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    fn render_actions_card(&self, ui: &mut egui::Ui, requests: &mut Requests) {
        let game = self.session.controller();
        let can_undo = game.game_state() == GameState::Playing
            && game.settings().allow_undo
            && !game.move_history().is_empty();

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button(self.text.new_game.as_str()).clicked() {
                    requests.new_game = true;
                }
                if ui.button(self.text.restart.as_str()).clicked() {
                    requests.restart = true;
                }
            });
            ui.horizontal(|ui| {
                if ui.add_enabled(can_undo, egui::Button::new(self.text.undo.as_str())).clicked() {
                    requests.undo = true;
                }
                if ui.button(self.text.quit.as_str()).clicked() {
                    requests.quit = true;
                }
            });
        });
    }

    fn render_game_over_card(&self, ui: &mut egui::Ui, summary: &str) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(WIN_HIGHLIGHT));
                    ui.add_space(6.0);
                    ui.label(RichText::new(self.status_text()).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(summary).size(11.0).color(TEXT_SECONDARY));
                });
            });
    }

    /// Recent controller events, newest last
    fn render_event_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("EVENTS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for line in self.session.event_log() {
                ui.label(RichText::new(line).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = BOARD_AREA_BG;

            let clicked = self.board_view.show(ui, self.session.controller());

            if let Some(pos) = clicked {
                if !self.session.try_place_stone(pos) {
                    self.session.message = Some(self.text.invalid_move.clone());
                }
            }
        });
    }

    /// Keyboard shortcuts: N new game, R restart, Ctrl+Z undo, Esc quit
    fn read_shortcuts(ctx: &Context) -> Requests {
        ctx.input(|i| Requests {
            new_game: i.key_pressed(egui::Key::N),
            restart: i.key_pressed(egui::Key::R),
            undo: i.modifiers.command && i.key_pressed(egui::Key::Z),
            quit: i.key_pressed(egui::Key::Escape),
        })
    }

    fn apply(&mut self, ctx: &Context, requests: Requests) {
        if requests.new_game {
            info!("new game requested");
            self.session.new_game();
        }
        if requests.restart {
            info!("restart requested");
            self.session.restart();
        }
        if requests.undo && !self.session.undo() {
            self.session.message = Some(format!("{} unavailable", self.text.undo));
        }
        if requests.quit {
            info!("quit requested");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut requests = Self::read_shortcuts(ctx);

        self.render_menu_bar(ctx, &mut requests);
        self.render_side_panel(ctx, &mut requests);
        self.render_board(ctx);

        self.apply(ctx, requests);

        // Anything the controller reported this frame shows up on the next one
        if !self.session.drain_events().is_empty() {
            ctx.request_repaint();
        }
    }
}
