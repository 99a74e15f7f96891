// error.rs - Error types for the Game of Life core

use std::io;
use thiserror::Error;

/// Contract violations on a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{columns}: rows and columns must both be at least 1")]
    InvalidDimension { rows: usize, columns: usize },

    #[error("a {rows}x{columns} grid is too large to allocate")]
    TooLarge { rows: usize, columns: usize },

    #[error("cell ({row}, {column}) is outside a {rows}x{columns} grid")]
    IndexOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("pattern '{name}' ({height}x{width}) does not fit a {rows}x{columns} grid")]
    PatternTooLarge {
        name: &'static str,
        height: usize,
        width: usize,
        rows: usize,
        columns: usize,
    },
}

/// Problems turning a [`SimulationConfig`](crate::SimulationConfig) into a starting board.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
}

/// Failures surfaced by the simulation loop.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A renderer or display clearer failed to write to its output.
    #[error("display output failed")]
    Io(#[from] io::Error),
}

pub type Result<T, E = SimulationError> = std::result::Result<T, E>;
