//! Conway's Game of Life (B3/S23) on a bounded grid, rendered as text.

pub mod config;
pub mod cycle;
pub mod display;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod seed;
pub mod simulation;

pub use config::SimulationConfig;
pub use display::{DisplayClearer, NoClear, TerminalClearer};
pub use error::{ConfigError, GridError, SimulationError};
pub use grid::{CellState, Grid};
pub use neighbors::live_neighbors;
pub use render::{Glyphs, Renderer, TextRenderer};
pub use rules::{next_state, transition, transition_into};
pub use seed::{Bernoulli, RandomSource};
pub use simulation::{Phase, Simulation};
