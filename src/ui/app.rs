//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Vec2};

use crate::board::Stone;
use crate::session::Session;

use super::board_view::BoardView;
use super::theme::*;

/// Which screen the application is showing.
///
/// Explicit states instead of tearing down and rebuilding the widget
/// tree on every switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Playing,
}

/// Main Gomoku application
pub struct GomokuApp {
    screen: Screen,
    session: Session,
    board_view: BoardView,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            screen: Screen::Start,
            session: Session::new(),
            board_view: BoardView::default(),
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Enter the play screen with a fresh board
    fn start_game(&mut self) {
        self.session.reset();
        self.screen = Screen::Playing;
    }

    /// Leave the play screen, discarding the board state
    fn back_to_menu(&mut self) {
        self.session.reset();
        self.screen = Screen::Start;
    }

    /// Render the start screen (title, Start and Quit buttons)
    fn render_start_screen(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(ui.available_height() * 0.25);

                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("●○")
                            .size(36.0)
                            .color(egui::Color32::from_rgb(180, 180, 185)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new("GOMOKU").size(40.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("Five in a row").size(14.0).color(TEXT_MUTED));

                    ui.add_space(40.0);

                    let button = |text: &str| {
                        egui::Button::new(RichText::new(text).size(16.0).color(TEXT_PRIMARY))
                            .min_size(Vec2::new(140.0, 40.0))
                            .corner_radius(CornerRadius::same(6))
                    };

                    if ui.add(button("Start")).clicked() {
                        self.start_game();
                    }
                    ui.add_space(10.0);
                    if ui.add(button("Quit")).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("●○")
                            .size(20.0)
                            .color(egui::Color32::from_rgb(180, 180, 185)),
                    );
                    ui.add_space(4.0);
                    ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_controls_card(ui);
                ui.add_space(10.0);

                self.render_moves_card(ui);

                if let Some(winner) = self.session.winner() {
                    ui.add_space(10.0);
                    self.render_winner_card(ui, winner);
                }

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Back to menu").clicked() {
                        self.back_to_menu();
                    }
                });
            });
    }

    /// Render the input-scheme reminder card
    fn render_controls_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CONTROLS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("●").size(16.0).color(egui::Color32::from_rgb(70, 70, 75)));
                ui.label(RichText::new("Black — left click").size(12.0).color(TEXT_SECONDARY));
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("○").size(16.0).color(egui::Color32::from_rgb(220, 220, 225)));
                ui.label(RichText::new("White — right click").size(12.0).color(TEXT_SECONDARY));
            });
        });
    }

    /// Render the per-color move counts
    fn render_moves_card(&self, ui: &mut egui::Ui) {
        let board = self.session.board();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STONES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Black: {}", board.moves_of(Stone::Black).len()))
                    .size(12.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!("White: {}", board.moves_of(Stone::White).len()))
                    .size(12.0)
                    .color(TEXT_SECONDARY),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Total: {}", board.stone_count()))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render the winner banner
    fn render_winner_card(&mut self, ui: &mut egui::Ui, winner: Stone) {
        let (name, symbol, accent) = match winner {
            Stone::Black => ("BLACK", "●", egui::Color32::from_rgb(70, 70, 75)),
            Stone::White => ("WHITE", "○", egui::Color32::from_rgb(220, 220, 225)),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 50.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });

                    ui.add_space(12.0);
                    if ui.button("New game").clicked() {
                        self.session.reset();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let clicked = self.board_view.show(
                ui,
                self.session.board(),
                self.session.last_move(),
                self.session.winning_line(),
                self.session.is_over(),
            );

            if let Some(click) = clicked {
                // Rejected placements render nothing; the next frame
                // simply shows an unchanged board
                let _ = self.session.handle_click(
                    click.pos.col as i32,
                    click.pos.row as i32,
                    click.color,
                );
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
            // Escape - Back to menu
            if i.key_pressed(egui::Key::Escape) {
                self.back_to_menu();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::Start => self.render_start_screen(ctx),
            Screen::Playing => {
                self.handle_input(ctx);
                self.render_side_panel(ctx);
                self.render_board(ctx);
            }
        }
    }
}
