// config.rs - Run configuration shared by the terminal and GUI front ends

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::patterns;
use crate::render::Glyphs;
use crate::seed::{self, Bernoulli, DEFAULT_LIVE_PROBABILITY};
use std::time::Duration;

/// Pause between streamed generations when none is configured.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(200);

/// Everything needed to set up and drive one simulation run.
///
/// Start from `SimulationConfig::new(rows, columns)` and adjust with the
/// builder methods.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub columns: usize,
    /// Transitions to run; `None` streams until interrupted.
    pub iterations: Option<u64>,
    /// Chance that a randomly seeded cell starts alive.
    pub probability: f64,
    /// Fixed RNG seed for reproducible boards.
    pub seed: Option<u64>,
    /// Catalogue pattern to start from instead of a random board.
    pub pattern: Option<String>,
    pub glyphs: Glyphs,
    pub frame_delay: Duration,
    /// Stop streaming once a generation repeats a recent one.
    pub halt_on_cycle: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 40,
            iterations: None,
            probability: DEFAULT_LIVE_PROBABILITY,
            seed: None,
            pattern: None,
            glyphs: Glyphs::default(),
            frame_delay: DEFAULT_FRAME_DELAY,
            halt_on_cycle: false,
        }
    }
}

impl SimulationConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn iterations(mut self, times: u64) -> Self {
        self.iterations = Some(times);
        self
    }

    pub fn probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn pattern(mut self, name: impl Into<String>) -> Self {
        self.pattern = Some(name.into());
        self
    }

    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn halt_on_cycle(mut self, enabled: bool) -> Self {
        self.halt_on_cycle = enabled;
        self
    }

    /// Builds generation 0: the named pattern if one is set, otherwise a random board.
    pub fn initial_grid(&self) -> Result<Grid, ConfigError> {
        let mut grid = Grid::new(self.rows, self.columns)?;
        match &self.pattern {
            Some(name) => {
                let pattern = patterns::find(name).ok_or_else(|| ConfigError::UnknownPattern(name.clone()))?;
                patterns::apply_pattern(&mut grid, pattern)?;
                log::info!("starting from pattern '{}'", pattern.name);
            }
            None => {
                let mut source = match self.seed {
                    Some(seed) => Bernoulli::seeded(self.probability, seed),
                    None => Bernoulli::from_entropy(self.probability),
                };
                seed::randomize(&mut grid, &mut source);
            }
        }
        Ok(grid)
    }
}
