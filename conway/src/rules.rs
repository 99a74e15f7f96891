// rules.rs - Conway's B3/S23 transition over a whole grid

use crate::error::GridError;
use crate::grid::{CellState, Grid};
use crate::neighbors::live_neighbors;

/// Conway's rule for one cell given its live neighbor count.
pub fn next_state(current: CellState, live_neighbors: u8) -> CellState {
    match (current, live_neighbors) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive, // Survival
        (CellState::Dead, 3) => CellState::Alive,                          // Birth
        _ => CellState::Dead,                                              // Death or stays dead
    }
}

/// Computes the next generation into a freshly allocated grid.
///
/// `grid` is only read, so every cell sees the same previous generation.
pub fn transition(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    fill_next(grid, &mut next);
    next
}

/// Computes the next generation of `current` into `next`.
///
/// Both buffers must have the same dimensions. Every cell of `next` is
/// overwritten, so its previous contents do not matter.
pub fn transition_into(current: &Grid, next: &mut Grid) -> Result<(), GridError> {
    if current.dimensions() != next.dimensions() {
        return Err(GridError::DimensionMismatch {
            left: current.dimensions(),
            right: next.dimensions(),
        });
    }
    fill_next(current, next);
    Ok(())
}

pub(crate) fn fill_next(current: &Grid, next: &mut Grid) {
    let columns = current.columns();
    for (idx, slot) in next.cells_mut().iter_mut().enumerate() {
        let (row, column) = (idx / columns, idx % columns);
        let state = CellState::from(current.is_alive(row, column));
        *slot = next_state(state, live_neighbors(current, row, column));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        for count in 0..=8u8 {
            let survives = count == 2 || count == 3;
            assert_eq!(next_state(CellState::Alive, count).is_alive(), survives, "alive with {count}");
            assert_eq!(next_state(CellState::Dead, count).is_alive(), count == 3, "dead with {count}");
        }
    }

    #[test]
    fn transition_into_rejects_mismatched_buffers() {
        let current = Grid::new(3, 3).unwrap();
        let mut next = Grid::new(3, 4).unwrap();
        assert_eq!(
            transition_into(&current, &mut next),
            Err(GridError::DimensionMismatch { left: (3, 3), right: (3, 4) })
        );
    }

    #[test]
    fn transition_into_overwrites_stale_buffer() {
        let current = Grid::from_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        let mut next = Grid::from_cells(5, 5, &[(0, 0), (4, 4)]).unwrap();
        transition_into(&current, &mut next).unwrap();
        assert_eq!(next, transition(&current));
        assert_eq!(next.live_cells().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (3, 2)]);
    }
}
