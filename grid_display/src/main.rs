// main.rs - Windowed viewer for Conway's Game of Life
// Drives the same conway::Simulation the terminal front end uses

use conway::seed::{self, Bernoulli, DEFAULT_LIVE_PROBABILITY};
use conway::{Grid, Simulation, patterns};
use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};

mod ui;

// Board size shown in the window
pub const GRID_SIZE: usize = 50;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(GridApp::default())),
    )
}

pub struct GridApp {
    pub simulation: Simulation,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub probability: f64,
    pub stopped_on_cycle: bool,
}

impl Default for GridApp {
    fn default() -> Self {
        Self {
            simulation: Simulation::new(empty_board()),
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            probability: DEFAULT_LIVE_PROBABILITY,
            stopped_on_cycle: false,
        }
    }
}

fn empty_board() -> Grid {
    match Grid::new(GRID_SIZE, GRID_SIZE) {
        Ok(grid) => grid,
        Err(err) => unreachable!("GRID_SIZE is non-zero: {err}"),
    }
}

impl GridApp {
    /// Advances one generation; pauses when the board starts repeating.
    pub fn update_generation(&mut self) {
        if self.simulation.generation() == 0 {
            self.simulation.observe_cycle();
        }
        self.simulation.step();
        if self.simulation.observe_cycle() {
            log::info!("board repeats at generation {}, pausing", self.simulation.generation());
            self.is_running = false;
            self.stopped_on_cycle = true;
        }
    }

    pub fn clear_grid(&mut self) {
        self.simulation.reset(empty_board());
        self.stopped_on_cycle = false;
    }

    pub fn apply_random_pattern(&mut self) {
        let mut grid = empty_board();
        seed::randomize(&mut grid, &mut Bernoulli::from_entropy(self.probability));
        self.simulation.reset(grid);
        self.stopped_on_cycle = false;
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        let mut grid = empty_board();
        match patterns::apply_pattern(&mut grid, pattern) {
            Ok(()) => {
                self.simulation.reset(grid);
                self.stopped_on_cycle = false;
            }
            Err(err) => log::warn!("{err}"),
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Err(err) = self.simulation.edit(|grid| grid.toggle(row, col)) {
            log::warn!("{err}");
        }
        self.stopped_on_cycle = false;
    }
}
