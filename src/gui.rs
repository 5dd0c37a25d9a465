#![cfg(feature = "gui")]
//! Windowed frontend on top of eframe/egui.

use std::time::Instant;

use eframe::egui::{self, Align2, Color32, FontId, Key, Pos2, Rect, Stroke};
use rand::Rng;

use crate::{
    board::Board,
    common::{Cell, Coord},
    input::{BoardGeometry, CellRect},
    turn::{Tone, TurnController, RESTART_PROMPT},
};

const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
const WATER: Color32 = Color32::from_rgb(0, 0, 200);
const HOVER: Color32 = Color32::from_rgb(0, 0, 255);
const SHIP: Color32 = Color32::from_rgb(150, 150, 150);
const RED: Color32 = Color32::from_rgb(200, 0, 0);
const GREEN: Color32 = Color32::from_rgb(0, 200, 0);

const TEXT_SIZE: f32 = 22.0;
const BANNER_SIZE: f32 = 44.0;

fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Neutral => BLACK,
        Tone::Alert => RED,
        Tone::Calm => WATER,
        Tone::Good => GREEN,
    }
}

fn to_rect(r: CellRect) -> Rect {
    Rect::from_min_size(Pos2::new(r.x, r.y), egui::vec2(r.width, r.height))
}

/// eframe application wrapping a [`TurnController`].
pub struct BattleshipApp<R> {
    controller: TurnController<R>,
    last_frame: Instant,
}

impl<R: Rng> BattleshipApp<R> {
    pub fn new(controller: TurnController<R>) -> Self {
        Self {
            controller,
            last_frame: Instant::now(),
        }
    }

    fn draw_board(&self, painter: &egui::Painter, board: &Board, geometry: BoardGeometry, show_ships: bool) {
        let cell_size = geometry.cell_size;
        for coord in board.coords() {
            let rect = to_rect(geometry.cell_rect(coord));
            painter.rect_filled(rect, 0.0, WATER);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, BLACK));
            match board.cell(coord).unwrap_or(Cell::Empty) {
                Cell::Ship if show_ships => {
                    painter.rect_filled(rect.shrink(5.0), 0.0, SHIP);
                }
                Cell::Hit => {
                    let stroke = Stroke::new(3.0, RED);
                    painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
                    painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
                }
                Cell::Miss => {
                    painter.circle_stroke(rect.center(), cell_size / 4.0, Stroke::new(3.0, GREEN));
                }
                Cell::Empty | Cell::Ship => {}
            }
        }
    }

    fn message(&self, painter: &egui::Painter, text: &str, color: Color32, y_offset: f32, size: f32) {
        let (width, height) = self.controller.config().screen_size();
        let pos = Pos2::new(width as f32 / 2.0, height as f32 - 50.0 + y_offset);
        painter.text(pos, Align2::CENTER_CENTER, text, FontId::proportional(size), color);
    }

    fn handle_input(&mut self, ctx: &egui::Context) -> anyhow::Result<()> {
        let radar = self.controller.config().enemy_board_geometry();
        let (clicked, restart) = ctx.input(|i| {
            let clicked = if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            };
            (clicked, i.key_pressed(Key::R))
        });
        if let Some(pos) = clicked {
            self.controller.click(radar.cell_at(pos.x, pos.y))?;
        }
        if restart {
            self.controller.restart()?;
        }
        Ok(())
    }

    fn hovered(&self, ctx: &egui::Context) -> Option<Coord> {
        let radar = self.controller.config().enemy_board_geometry();
        let pos = ctx.input(|i| i.pointer.hover_pos())?;
        self.controller.hover_target(radar.cell_at(pos.x, pos.y))
    }

    fn paint(&self, ui: &egui::Ui, hover: Option<Coord>) {
        let painter = ui.painter();
        let config = self.controller.config();
        let game = self.controller.game();
        let own = config.own_board_geometry();
        let radar = config.enemy_board_geometry();
        let label_font = FontId::proportional(TEXT_SIZE);

        self.draw_board(painter, game.player_board(), own, true);
        painter.text(
            Pos2::new(own.origin_x, own.origin_y - 30.0),
            Align2::LEFT_TOP,
            "Your Ships",
            label_font.clone(),
            BLACK,
        );
        self.draw_board(painter, game.player_guesses(), radar, false);
        painter.text(
            Pos2::new(radar.origin_x, radar.origin_y - 30.0),
            Align2::LEFT_TOP,
            "Enemy Radar",
            label_font,
            BLACK,
        );
        if let Some(coord) = hover {
            painter.rect_stroke(to_rect(radar.cell_rect(coord)), 0.0, Stroke::new(3.0, HOVER));
        }

        match self.controller.banner() {
            Some(banner) => {
                self.message(painter, &banner.text, tone_color(banner.tone), 0.0, BANNER_SIZE);
                self.message(painter, RESTART_PROMPT, BLACK, 50.0, TEXT_SIZE);
            }
            None => {
                let status = self.controller.status();
                self.message(painter, &status.text, tone_color(status.tone), 0.0, TEXT_SIZE);
                if let Some(line) = self.controller.ai_line() {
                    self.message(painter, &line.text, tone_color(line.tone), 30.0, TEXT_SIZE);
                }
            }
        }
    }
}

impl<R: Rng> eframe::App for BattleshipApp<R> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        if let Err(e) = self.handle_input(ctx) {
            log::error!("input handling failed: {}", e);
        }
        if let Err(e) = self.controller.tick(elapsed) {
            log::error!("turn update failed: {}", e);
        }
        let hover = self.hovered(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(WHITE))
            .show(ctx, |ui| self.paint(ui, hover));

        ctx.request_repaint_after(self.controller.config().frame_interval());
    }
}

/// Open the game window and block until it is closed.
pub fn run<R: Rng + 'static>(controller: TurnController<R>) -> anyhow::Result<()> {
    let (width, height) = controller.config().screen_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Battleship")
            .with_inner_size([width as f32, height as f32])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Battleship",
        native_options,
        Box::new(|_cc| Ok(Box::new(BattleshipApp::new(controller)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {}", e))
}
