//! Main application for the GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::config::DisplayConfig;
use crate::rules::RoundStatus;
use crate::turn::PlayerCount;
use crate::Mark;

use super::board_view::{BoardScene, BoardView};
use super::game_state::GameState;
use super::theme::*;

/// Main tic-tac-trio application
pub struct TrioApp {
    state: GameState,
    display: DisplayConfig,
    board_view: BoardView,
    show_debug: bool,
}

impl TrioApp {
    /// App over an already built game state
    pub fn new(state: GameState, display: DisplayConfig) -> Self {
        Self {
            state,
            display,
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn new_session(&mut self, players: PlayerCount) {
        if let Err(e) = self.state.new_session(players) {
            self.state.message = Some(e.to_string());
        }
    }

    fn next_round(&mut self) {
        if let Err(e) = self.state.next_round() {
            self.state.message = Some(e.to_string());
        }
    }

    fn mark_label(&self, mark: Mark) -> (String, egui::Color32) {
        match self.display.styles.get(mark) {
            Some(style) => (style.glyph.to_string(), mark_color(style.color, 255)),
            None => ("-".to_string(), TEXT_MUTED),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Session (3 players)").clicked() {
                        self.new_session(PlayerCount::Three);
                        ui.close_menu();
                    }
                    if ui.button("New Session (2 players)").clicked() {
                        self.new_session(PlayerCount::Two);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(self.state.is_over(), egui::Button::new("Next Round (N)"))
                        .clicked()
                    {
                        self.next_round();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Stats (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} players", self.state.order().player_count()));
                });
            });
        });
    }

    /// Render the side panel with round info and stats
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_round_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new(&self.display.header).size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let mark = self.state.current_mark();
            let (glyph, color) = self.mark_label(mark);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, CornerRadius::same(8), PANEL_BG);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    glyph,
                    egui::FontId::proportional(30.0),
                    color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let who = if self.state.order().is_automated(mark) {
                        "COMPUTER"
                    } else {
                        "HUMAN"
                    };
                    ui.label(RichText::new(who).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, status_color) = if self.state.is_over() {
                        ("Round over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_thinking() {
                        ("Thinking...", STATUS_BUSY)
                    } else {
                        ("Your turn", STATUS_READY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(status_color));
                });
            });
        });
    }

    fn render_round_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ROUND").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let size = self.state.round.board().size();
            let number = self.state.session.scoreboard().rounds() + u32::from(!self.state.is_over());
            ui.label(
                RichText::new(format!("#{number}  {size}x{size}"))
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
            ui.label(
                RichText::new(format!("Move {}", self.state.round.moves_played()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("Searching {:.2}s", elapsed.as_secs_f32()))
                        .size(11.0)
                        .color(STATUS_BUSY),
                );
            }
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let scoreboard = self.state.session.scoreboard();
            for mark in self.state.order().marks() {
                let (glyph, color) = self.mark_label(mark);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(glyph).size(18.0).strong().color(color));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(scoreboard.wins(mark).to_string())
                                .size(14.0)
                                .color(TEXT_PRIMARY),
                        );
                    });
                });
            }
            ui.horizontal(|ui| {
                ui.label(RichText::new("Ties").size(12.0).color(TEXT_SECONDARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(scoreboard.draws().to_string())
                            .size(14.0)
                            .color(TEXT_PRIMARY),
                    );
                });
            });
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                return;
            };
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("Depth {}", result.depth))
                            .size(11.0)
                            .strong()
                            .color(STATUS_READY),
                    );
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        ui.label(RichText::new(format!("{} cutoffs", result.cutoffs)).size(10.0).color(TEXT_MUTED));
                        ui.label(RichText::new(format!("{} leaves", result.terminal_nodes)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });
            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Played {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.state.round.status() {
            RoundStatus::Won(mark) => {
                let (glyph, _) = self.mark_label(mark);
                if self.state.order().is_automated(mark) {
                    format!("Computer ({glyph}) wins")
                } else {
                    format!("Player {glyph} wins")
                }
            }
            RoundStatus::Draw => "It's a tie".to_string(),
            RoundStatus::InProgress => return,
        };
        let next_size = self.state.session.size();

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("ROUND OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    if self.state.session.at_max_size() {
                        ui.label(RichText::new("Maximum board size reached").size(11.0).color(TEXT_SECONDARY));
                    }
                    ui.add_space(12.0);

                    let label = RichText::new(format!("Next round ({next_size}x{next_size})"))
                        .size(14.0)
                        .strong()
                        .color(TEXT_PRIMARY);
                    if ui.add(egui::Button::new(label).fill(egui::Color32::from_rgb(60, 100, 70))).clicked() {
                        self.next_round();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(STATUS_ALERT)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.state.winning_line();
            let scene = BoardScene {
                board: self.state.round.board(),
                styles: &self.display.styles,
                current: self.state.current_mark(),
                last_move: self.state.round.last_move(),
                winning_line: winning_line.as_deref(),
                accepting_input: self.state.is_human_turn() && !self.state.is_ai_thinking(),
            };

            if let Some(pos) = self.board_view.show(ui, &scene) {
                if let Err(msg) = self.state.try_place(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, next_round) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if next_round {
            self.next_round();
        }
    }
}

impl eframe::App for TrioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
