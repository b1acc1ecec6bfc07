// ui.rs - egui drawing and controls for the Game of Life window

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use conway::config::{MAX_INTERVAL, MIN_INTERVAL, clamp_interval};
use conway::patterns;

use crate::GameOfLife;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Driver loop: advance when running and the interval has elapsed
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::SidePanel::right("dashboard").min_width(260.0).show(ctx, |ui| {
            self.dashboard(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_grid(ui);

            ui.separator();

            let live_cells = self.sim.grid().live_count();
            let total = self.sim.rows() * self.sim.cols();
            ui.horizontal(|ui| {
                ui.label(format!("History: {}/{}", self.sim.history_position(), self.sim.history_len() - 1));
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep repainting while running so the timer keeps firing
        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

impl GameOfLife {
    fn dashboard(&mut self, ui: &mut egui::Ui) {
        ui.heading("Game of Life Controls");

        ui.horizontal(|ui| {
            let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
            if ui.button(button_text).clicked() {
                self.toggle_running();
            }
            if ui.button("🔄 Reset").clicked() {
                self.reset_grid();
            }
        });

        if self.config.debug {
            ui.separator();
            ui.label("Debug mode");
            ui.horizontal(|ui| {
                if ui.button("⏪ Previous").clicked() {
                    self.go_previous();
                }
                if ui.button("⏩ Next").clicked() {
                    self.go_forward();
                }
            });

            // Timeline bounded to the recorded history
            ui.label("History:");
            let last = self.sim.history_len() - 1;
            let mut position = self.sim.history_position();
            if ui.add(egui::Slider::new(&mut position, 0..=last)).changed() {
                self.jump_to(position);
            }
        }

        ui.separator();

        // Speed control, in milliseconds between generations
        ui.label("Speed (ms):");
        let mut millis = self.update_interval.as_millis() as u64;
        let range = MIN_INTERVAL.as_millis() as u64..=MAX_INTERVAL.as_millis() as u64;
        if ui.add(egui::Slider::new(&mut millis, range).suffix(" ms")).changed() {
            self.update_interval = clamp_interval(Duration::from_millis(millis));
        }

        ui.separator();

        // Pattern dropdown
        ui.label("Pattern:");
        egui::ComboBox::from_id_source("pattern_selector")
            .selected_text(patterns::PATTERNS[self.selected_pattern].name)
            .show_ui(ui, |ui| {
                for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                    ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                }
            });
        if ui.button("Apply Pattern").clicked() {
            self.apply_selected_pattern();
        }

        ui.separator();

        if self.store.is_some() {
            ui.label("Saved patterns:");
            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut self.save_name);
                if ui.button("💾 Save").clicked() {
                    self.save_pattern();
                }
            });

            let saved = self.saved_patterns();
            let selected = self.selected_file.clone().unwrap_or_else(|| String::from("(none)"));
            egui::ComboBox::from_id_source("saved_selector")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for name in saved {
                        let label = name.clone();
                        ui.selectable_value(&mut self.selected_file, Some(name), label);
                    }
                });
            if ui.button("📂 Load").clicked() {
                self.load_selected_file();
            }

            ui.separator();
        }

        ui.horizontal(|ui| {
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });

        if !self.status.is_empty() {
            ui.separator();
            ui.label(self.status.as_str());
        }
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let box_size = 25.0;
        let spacing = 1.0;
        let (rows, cols) = (self.sim.rows(), self.sim.cols());

        let start_pos = ui.cursor().min;
        let total_size = Vec2::new(
            (box_size + spacing) * cols as f32 - spacing,
            (box_size + spacing) * rows as f32 - spacing,
        );

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

        // Fill background
        painter.rect_filled(
            Rect::from_min_size(start_pos, total_size),
            0.0,
            Color32::BLACK,
        );

        let mut clicked = None;
        for row in 0..rows {
            for col in 0..cols {
                let x = start_pos.x + col as f32 * (box_size + spacing);
                let y = start_pos.y + row as f32 * (box_size + spacing);

                let rect = Rect::from_min_size(
                    egui::pos2(x, y),
                    Vec2::splat(box_size),
                );

                let cell_color = if self.sim.get(row, col) {
                    self.live_color
                } else {
                    self.dead_color
                };

                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));

                // Clicking only edits while paused
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
            self.sim.toggle_cell(row, col);
        }
    }
}
