// main.rs - egui front-end for the Game of Life engine
//
// The window keeps no cell state of its own: every frame is drawn from
// `Simulation::grid()`, and clicks go back through the simulation.

use std::time::{Duration, Instant};

use conway::patterns::{self, PatternStore};
use conway::{Simulation, SimulationConfig};
use eframe::egui;
use egui::Color32;
use tracing::{error, info, warn};

mod ui;

fn main() -> Result<(), eframe::Error> {
    let debug = std::env::args().any(|arg| arg == "--debug");
    let config = SimulationConfig::default().with_debug(debug);
    conway::logging::init(&config);
    let mode = if debug { "DEBUG" } else { "RELEASE" };
    info!(mode, version = env!("CARGO_PKG_VERSION"), "starting");

    let app = match GameOfLife::new(config) {
        Ok(app) => app,
        Err(e) => {
            error!("failed to create simulation: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        &format!("Conway's Game of Life v{}", env!("CARGO_PKG_VERSION")),
        options,
        Box::new(|_cc| Box::new(app)),
    )
}

pub struct GameOfLife {
    pub sim              : Simulation,
    pub config           : SimulationConfig,
    pub store            : Option<PatternStore>,
    pub is_running       : bool,
    pub last_update      : Instant,
    pub update_interval  : Duration,
    pub live_color       : Color32,
    pub dead_color       : Color32,
    pub selected_pattern : usize,
    pub save_name        : String,
    pub selected_file    : Option<String>,
    pub status           : String,
}

impl GameOfLife {
    pub fn new(config: SimulationConfig) -> conway::error::Result<Self> {
        let sim = Simulation::from_config(&config)?;

        // The app still runs without a writable pattern directory.
        let store = match PatternStore::open(&config.pattern_dir) {
            Ok(store) => Some(store),
            Err(e) => {
                warn!(dir = %config.pattern_dir.display(), "pattern store unavailable: {e}");
                None
            }
        };

        Ok(Self {
            sim,
            update_interval: config.update_interval,
            config,
            store,
            is_running: false,
            last_update: Instant::now(),
            live_color: Color32::from_rgb(0x4C, 0xAF, 0x50),
            dead_color: Color32::from_rgb(0xDD, 0xDD, 0xDD),
            selected_pattern: 0,
            save_name: String::from("pattern.json"),
            selected_file: None,
            status: String::new(),
        })
    }

    /// One tick of the driver loop. Stops the run on extinction.
    pub fn update_generation(&mut self) {
        if !self.sim.advance_generation() {
            info!(position = self.sim.history_position(), "no live cells left, stopping");
            self.is_running = false;
            self.status = String::from("Extinction: simulation stopped");
        }
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.last_update = Instant::now();
        }
    }

    pub fn reset_grid(&mut self) {
        self.is_running = false;
        self.sim.reset();
        self.status.clear();
    }

    pub fn apply_selected_pattern(&mut self) {
        self.is_running = false;
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            self.sim.load_pattern(pattern);
            self.status = format!("Loaded {}", pattern.name);
        }
    }

    pub fn go_previous(&mut self) {
        self.is_running = false;
        self.sim.go_to_previous_generation();
    }

    pub fn go_forward(&mut self) {
        self.is_running = false;
        if !self.sim.go_to_next_generation() {
            self.status = String::from("Extinction: no next generation");
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        self.is_running = false;
        if let Err(e) = self.sim.restore_at(index) {
            warn!("timeline jump ignored: {e}");
        }
    }

    pub fn save_pattern(&mut self) {
        let Some(store) = &self.store else { return };
        let cells: Vec<_> = self.sim.grid().live_cells().collect();
        if cells.is_empty() {
            return;
        }
        self.status = match store.save(&cells, &self.save_name) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(e) => {
                error!("saving pattern failed: {e}");
                format!("Save failed: {e}")
            }
        };
    }

    pub fn load_selected_file(&mut self) {
        let (Some(store), Some(name)) = (&self.store, &self.selected_file) else { return };
        match store.load(name) {
            Ok(cells) => {
                self.is_running = false;
                self.sim.reset();
                let placed = self.sim.load_cells(cells, (0, 0));
                self.status = format!("Loaded {name} ({placed} cells)");
            }
            Err(e) => {
                error!("loading pattern failed: {e}");
                self.status = format!("Load failed: {e}");
            }
        }
    }

    pub fn saved_patterns(&self) -> Vec<String> {
        self.store
            .as_ref()
            .and_then(|store| store.list().ok())
            .unwrap_or_default()
    }
}
