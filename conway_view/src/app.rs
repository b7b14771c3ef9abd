// app.rs - egui front end for the conway engine
// The world is drawn into a texture; only the region that changed since the
// last frame is repainted.

use std::time::{Duration, Instant};

use conway::{PATTERNS, Palette, Region, Simulation, draw_world, redraw_area};
use eframe::egui;
use egui::{Color32, ColorImage, Rect, TextureHandle, TextureOptions, Vec2, pos2};
use tracing::{info, warn};

use crate::config::{MAX_STEPS_PER_SECOND, MIN_STEPS_PER_SECOND, ViewConfig};
use crate::error::ViewError;

const HISTORY_LEN: usize = 10;

/// Recent state hashes, used to stop the run once the world starts repeating.
#[derive(Debug, Default)]
pub struct StateHistory {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl StateHistory {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records `hash` and reports whether it was already among the last
    /// [`HISTORY_LEN`] states.
    pub fn check_for_cycle(&mut self, hash: u64) -> bool {
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }
}

/// Copies the pixels of `region` (1-based, inclusive) out of a row-major
/// frame `width` pixels wide.
fn region_image(frame: &[Color32], width: usize, region: Region) -> ColorImage {
    let mut pixels = Vec::with_capacity(region.width() * region.height());
    for y in region.min_y..=region.max_y {
        let start = (y - 1) * width + (region.min_x - 1);
        pixels.extend_from_slice(&frame[start..start + region.width()]);
    }
    ColorImage {
        size: [region.width(), region.height()],
        pixels,
    }
}

pub struct LifeApp {
    sim: Simulation,
    cell_pixels: f32,
    live_color: Color32,
    dead_color: Color32,
    palette: Palette<Color32>,
    pixels: Vec<Color32>,
    texture: Option<TextureHandle>,
    drawn_generation: Option<u64>, // None forces a full redraw
    last_update: Instant,
    update_interval: Duration,
    selected_pattern: usize,
    history: StateHistory,
}

impl LifeApp {
    pub fn new(config: ViewConfig) -> Result<Self, ViewError> {
        let update_interval = Duration::try_from_secs_f32(1.0 / config.steps_per_second)
            .map_err(|e| ViewError::Config(format!("invalid step rate: {e}")))?;
        let mut sim = Simulation::new(config.width, config.height)?;
        sim.randomize(config.types)?;

        let live_color = Color32::from_rgb(0, 200, 0);
        let dead_color = Color32::from_rgb(40, 40, 40);
        Ok(Self {
            sim,
            cell_pixels: config.cell_pixels,
            live_color,
            dead_color,
            palette: Palette::two_tone(dead_color, live_color),
            pixels: vec![dead_color; config.width * config.height],
            texture: None,
            drawn_generation: None,
            last_update: Instant::now(),
            update_interval,
            selected_pattern: 0,
            history: StateHistory::default(),
        })
    }

    /// Window size that fits the world plus the control rows.
    pub fn preferred_size(&self) -> [f32; 2] {
        let world = self.sim.world();
        [
            (world.width() as f32 * self.cell_pixels + 32.0).max(640.0),
            world.height() as f32 * self.cell_pixels + 200.0,
        ]
    }

    pub fn update_generation(&mut self) {
        self.sim.step();
        if self.history.check_for_cycle(self.sim.world().state_hash()) {
            info!(generation = self.sim.total_iterations(), "state repeats, pausing");
            self.sim.set_running(false);
        }
    }

    pub fn clear_grid(&mut self) {
        self.sim.clear();
        self.history.reset();
    }

    pub fn randomize(&mut self) {
        let types = self.sim.world().types();
        if let Err(e) = self.sim.randomize(types) {
            warn!(error = %e, "random fill failed");
        }
        self.history.reset();
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.sim.clear();
            self.sim.place_pattern_centered(pattern);
            self.history.reset();
        }
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.sim.world().cell(x, y) {
            self.sim.set_cell(x, y, u8::from(cell == 0));
        }
    }

    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let generation = self.sim.total_iterations();
        // Incremental redraw only covers a single step.
        let full = self.texture.is_none()
            || self.drawn_generation.is_none_or(|drawn| generation > drawn + 1);
        let world = self.sim.world();
        let Some(region) = redraw_area(world, full) else {
            self.drawn_generation = Some(generation);
            return;
        };
        draw_world(world, &mut self.pixels, &self.palette, full);
        self.drawn_generation = Some(generation);

        let image = region_image(&self.pixels, world.width(), region);
        match &mut self.texture {
            Some(texture) => {
                texture.set_partial([region.min_x - 1, region.min_y - 1], image, TextureOptions::NEAREST)
            }
            None => self.texture = Some(ctx.load_texture("world", image, TextureOptions::NEAREST)),
        }
    }

    fn recolor(&mut self) {
        self.palette = Palette::two_tone(self.dead_color, self.live_color);
        self.drawn_generation = None;
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.sim.is_running() && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }
        self.refresh_texture(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            ui.horizontal(|ui| {
                let button_text = if self.sim.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.sim.toggle_running();
                    if self.sim.is_running() {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.sim.set_running(false);
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.sim.set_running(false);
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.sim.set_running(false);
                    self.randomize();
                }

                ui.separator();

                ui.label("Pattern:");
                let selected = PATTERNS.get(self.selected_pattern).map_or("", |p| p.name);
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.sim.set_running(false);
                    self.apply_selected_pattern();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1.0 / self.update_interval.as_secs_f32();
                let slider = egui::Slider::new(&mut speed, MIN_STEPS_PER_SECOND..=MAX_STEPS_PER_SECOND)
                    .suffix(" gen/sec");
                if ui.add(slider).changed() {
                    if let Ok(interval) = Duration::try_from_secs_f32(1.0 / speed) {
                        self.update_interval = interval;
                    }
                }

                ui.separator();

                let mut recolor = false;
                ui.label("Live:");
                recolor |= ui.color_edit_button_srgba(&mut self.live_color).changed();
                ui.label("Dead:");
                recolor |= ui.color_edit_button_srgba(&mut self.dead_color).changed();
                if recolor {
                    self.recolor();
                }
            });

            ui.separator();
            ui.label("Click cells to toggle them while paused.");

            let world = self.sim.world();
            let (width, height) = (world.width(), world.height());
            let size = Vec2::new(width as f32, height as f32) * self.cell_pixels;
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());

            if let Some(texture) = &self.texture {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                painter.image(texture.id(), response.rect, uv, Color32::WHITE);
            }

            if !self.sim.is_running() && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = (pos - response.rect.min) / self.cell_pixels;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        self.toggle_cell(offset.x as usize, offset.y as usize);
                    }
                }
            }

            ui.separator();

            let live_cells = self.sim.world().population();
            let total = width * height;
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.sim.total_iterations()));
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });
        });

        if self.sim.is_running() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_detects_a_repeat_within_the_window() {
        let mut history = StateHistory::default();
        assert!(!history.check_for_cycle(1));
        assert!(!history.check_for_cycle(2));
        assert!(history.check_for_cycle(1));
    }

    #[test]
    fn history_forgets_old_states() {
        let mut history = StateHistory::default();
        for hash in 1..=HISTORY_LEN as u64 + 1 {
            assert!(!history.check_for_cycle(hash));
        }
        // Hash 1 was overwritten by the eleventh entry.
        assert!(!history.check_for_cycle(1));
    }

    #[test]
    fn zero_hash_is_not_mistaken_for_history() {
        let mut history = StateHistory::default();
        assert!(!history.check_for_cycle(0));
    }

    #[test]
    fn blinker_run_pauses_on_repeat() {
        let config = ViewConfig { width: 16, height: 16, ..ViewConfig::default() };
        let mut app = LifeApp::new(config).unwrap();
        app.selected_pattern = PATTERNS.iter().position(|p| p.name == "Blinker").unwrap();
        app.apply_selected_pattern();
        app.sim.set_running(true);

        app.update_generation();
        assert!(app.sim.is_running());
        app.update_generation();
        assert!(app.sim.is_running());
        app.update_generation();
        assert!(!app.sim.is_running());
        assert_eq!(app.sim.total_iterations(), 3);
    }

    #[test]
    fn rejects_a_step_rate_with_no_representable_interval() {
        let config = ViewConfig { steps_per_second: 1e-39, ..ViewConfig::default() };
        assert!(matches!(LifeApp::new(config), Err(ViewError::Config(_))));
    }

    #[test]
    fn applying_a_pattern_keeps_the_generation() {
        let config = ViewConfig { width: 16, height: 16, ..ViewConfig::default() };
        let mut app = LifeApp::new(config).unwrap();
        app.update_generation();
        app.selected_pattern = PATTERNS.iter().position(|p| p.name == "Glider").unwrap();
        app.apply_selected_pattern();
        assert_eq!(app.sim.total_iterations(), 1);
        assert_eq!(app.sim.world().population(), 5);
    }

    #[test]
    fn randomize_reuses_the_configured_types() {
        let config = ViewConfig { width: 8, height: 8, types: 3, ..ViewConfig::default() };
        let mut app = LifeApp::new(config).unwrap();
        app.clear_grid();
        app.randomize();
        assert_eq!(app.sim.world().types(), 3);
        assert!(app.sim.world().cells().iter().all(|&cell| cell < 3));
    }

    #[test]
    fn region_image_copies_only_the_region_rows() {
        // 4x3 frame, pixel value encodes its position.
        let frame: Vec<Color32> = (0..12u8).map(Color32::from_gray).collect();
        let region = Region { min_x: 2, min_y: 2, max_x: 3, max_y: 3 };
        let image = region_image(&frame, 4, region);
        assert_eq!(image.size, [2, 2]);
        let expected: Vec<Color32> = [5u8, 6, 9, 10].into_iter().map(Color32::from_gray).collect();
        assert_eq!(image.pixels, expected);
    }

    #[test]
    fn toggle_ignores_clicks_past_the_world() {
        let config = ViewConfig { width: 8, height: 8, ..ViewConfig::default() };
        let mut app = LifeApp::new(config).unwrap();
        app.clear_grid();
        app.toggle_cell(2, 3);
        assert_eq!(app.sim.world().cell(2, 3), Some(1));
        app.toggle_cell(2, 3);
        assert_eq!(app.sim.world().cell(2, 3), Some(0));
        app.toggle_cell(8, 0);
        assert_eq!(app.sim.world().population(), 0);
    }
}
