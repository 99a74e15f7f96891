// neighbors.rs - Moore neighborhood counting with hard edges

use crate::grid::Grid;

/// Offsets of the eight Moore neighbors, the cell itself excluded.
#[rustfmt::skip]
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Counts live cells around `(row, column)`.
///
/// Neighbors that would fall outside the grid do not exist; nothing wraps.
pub fn live_neighbors(grid: &Grid, row: usize, column: usize) -> u8 {
    let (rows, columns) = grid.dimensions();
    let mut count = 0;

    for &(dr, dc) in &MOORE_OFFSETS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), column.checked_add_signed(dc)) else {
            continue;
        };
        if nr < rows && nc < columns && grid.is_alive(nr, nc) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_itself_is_not_counted() {
        let grid = Grid::from_cells(3, 3, &[(1, 1)]).unwrap();
        assert_eq!(live_neighbors(&grid, 1, 1), 0);
        assert_eq!(live_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn full_interior_cell_sees_eight() {
        let all: Vec<(usize, usize)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let grid = Grid::from_cells(3, 3, &all).unwrap();
        assert_eq!(live_neighbors(&grid, 1, 1), 8);
    }

    #[test]
    fn edges_do_not_wrap() {
        let all: Vec<(usize, usize)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let grid = Grid::from_cells(3, 3, &all).unwrap();
        assert_eq!(live_neighbors(&grid, 0, 0), 3);
        assert_eq!(live_neighbors(&grid, 0, 1), 5);
        assert_eq!(live_neighbors(&grid, 2, 2), 3);

        // A live cell in the opposite corner is not adjacent on a bounded board.
        let grid = Grid::from_cells(4, 4, &[(3, 3)]).unwrap();
        assert_eq!(live_neighbors(&grid, 0, 0), 0);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid = Grid::from_cells(1, 1, &[(0, 0)]).unwrap();
        assert_eq!(live_neighbors(&grid, 0, 0), 0);
    }
}
