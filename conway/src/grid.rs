// grid.rs - Grid types for Conway's Game of Life

use crate::error::GridError;
use std::fmt;

/// Life state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

impl From<CellState> for bool {
    fn from(state: CellState) -> Self {
        state.is_alive()
    }
}

/// Fixed-size board of cells, stored row-major.
///
/// Dimensions are chosen at construction and never change. Edges are hard
/// boundaries: there is nothing beyond row 0, column 0, the last row or the
/// last column.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimension { rows, columns });
        }
        let len = rows
            .checked_mul(columns)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Builds a custom board from nested rows, `true` meaning alive.
    pub fn from_rows(board: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let rows = board.len();
        let columns = board.first().map_or(0, Vec::len);
        let mut grid = Self::new(rows, columns)?;

        for (r, row) in board.into_iter().enumerate() {
            if row.len() != columns {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: columns,
                    found: row.len(),
                });
            }
            let start = r * columns;
            for (slot, alive) in grid.cells[start..start + columns].iter_mut().zip(row) {
                *slot = alive.into();
            }
        }
        Ok(grid)
    }

    /// Builds a board with exactly the listed `(row, column)` cells alive.
    pub fn from_cells(
        rows: usize,
        columns: usize,
        alive: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, columns)?;
        for &(r, c) in alive {
            grid.set(r, c, CellState::Alive)?;
        }
        Ok(grid)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Result<CellState, GridError> {
        let idx = self.index(row, column)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, column: usize, state: CellState) -> Result<(), GridError> {
        let idx = self.index(row, column)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Returns `false` for positions outside the grid instead of an error.
    pub fn is_alive(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns && self.cells[row * self.columns + column].is_alive()
    }

    /// Flips a cell between alive and dead.
    pub fn toggle(&mut self, row: usize, column: usize) -> Result<CellState, GridError> {
        let idx = self.index(row, column)?;
        let flipped = CellState::from(!self.cells[idx].is_alive());
        self.cells[idx] = flipped;
        Ok(flipped)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Iterates over the board one row slice at a time.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks_exact(self.columns)
    }

    /// Positions of all live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| (idx / columns, idx % columns))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, GridError> {
        if row >= self.rows || column >= self.columns {
            return Err(GridError::IndexOutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.columns)?;
        for row in self.rows_iter() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
