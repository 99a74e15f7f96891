// ui.rs - egui front end: controls, board painting, statistics

use crate::GridApp;
use conway::patterns;
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

const BOX_SIZE: f32 = 15.0;
const SPACING: f32 = 0.5;

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui);
            ui.separator();
            self.speed_and_colors(ui);
            ui.separator();

            if self.stopped_on_cycle {
                ui.colored_label(Color32::YELLOW, "Paused: the board repeats a recent generation.");
            } else {
                ui.label("Click cells to toggle them while paused.");
            }
            ui.separator();

            self.board(ui);
            ui.separator();
            self.statistics(ui);
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl GridApp {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.is_running = !self.is_running;
                self.stopped_on_cycle = false;
                self.last_update = Instant::now();
            }

            if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                self.update_generation();
            }

            if ui.button("⏹ Clear").clicked() {
                self.is_running = false;
                self.clear_grid();
            }

            if ui.button("🎲 Random").clicked() {
                self.is_running = false;
                self.apply_random_pattern();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.is_running = false;
                self.apply_selected_pattern();
            }

            ui.separator();
            ui.label(format!("Generation: {}", self.simulation.generation()));
        });
    }

    fn speed_and_colors(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
            if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
            }

            ui.separator();
            ui.label("Random fill:");
            ui.add(egui::Slider::new(&mut self.probability, 0.0..=1.0));

            ui.separator();
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let (rows, columns) = self.simulation.grid().dimensions();
        let total_size = Vec2::new(
            (BOX_SIZE + SPACING) * columns as f32 - SPACING,
            (BOX_SIZE + SPACING) * rows as f32 - SPACING,
        );
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        let mut clicked = None;
        for (row, cells) in self.simulation.grid().rows_iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(col as f32, row as f32) * (BOX_SIZE + SPACING),
                    Vec2::splat(BOX_SIZE),
                );
                let color = if cell.is_alive() { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                if !self.is_running && response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if rect.contains(pos) {
                            clicked = Some((row, col));
                        }
                    }
                }
            }
        }

        if let Some((row, col)) = clicked {
            self.toggle_cell(row, col);
        }
    }

    fn statistics(&self, ui: &mut egui::Ui) {
        let grid = self.simulation.grid();
        let live_cells = grid.population();
        let total = grid.rows() * grid.columns();
        ui.horizontal(|ui| {
            ui.label(format!("Live cells: {live_cells}"));
            ui.label(format!("Dead cells: {}", total - live_cells));
            ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
        });
    }
}
