// seed.rs - Random initial boards

use crate::grid::{CellState, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability that a randomly seeded cell starts alive.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.5;

/// Supplies one independent alive/dead decision per cell.
pub trait RandomSource {
    fn next_alive(&mut self) -> bool;
}

/// Draws `true` with a fixed probability.
#[derive(Debug, Clone)]
pub struct Bernoulli<R> {
    rng: R,
    probability: f64,
}

impl<R: Rng> Bernoulli<R> {
    /// `probability` is clamped into `[0, 1]`; NaN counts as 0.
    pub fn new(rng: R, probability: f64) -> Self {
        let probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        Self { rng, probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Bernoulli<StdRng> {
    /// Reproducible source: the same seed yields the same board.
    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), probability)
    }

    pub fn from_entropy(probability: f64) -> Self {
        Self::new(StdRng::from_entropy(), probability)
    }
}

impl<R: Rng> RandomSource for Bernoulli<R> {
    fn next_alive(&mut self) -> bool {
        self.rng.gen_bool(self.probability)
    }
}

/// Overwrites every cell of `grid` with a fresh draw from `source`, row by row.
pub fn randomize(grid: &mut Grid, source: &mut impl RandomSource) {
    for cell in grid.cells_mut() {
        *cell = CellState::from(source.next_alive());
    }
    log::debug!(
        "seeded {}x{} board with {} live cells",
        grid.rows(),
        grid.columns(),
        grid.population()
    );
}
