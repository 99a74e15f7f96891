// patterns.rs - Catalogue of well-known starting patterns

use crate::error::GridError;
use crate::grid::{CellState, Grid};

/// A named pattern, cells given as `(row, column)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Looks a pattern up by name, ignoring case and treating spaces, `-` and `_` alike.
pub fn find(name: &str) -> Option<&'static Pattern> {
    let wanted = normalize(name);
    PATTERNS.iter().find(|pattern| normalize(pattern.name) == wanted)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Pattern {
    /// Bounding box as `(height, width)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Stamps the pattern's live cells onto `grid` with its top-left corner at `origin`.
    /// Cells already alive elsewhere on the grid are left alone.
    pub fn place(&self, grid: &mut Grid, origin: (usize, usize)) -> Result<(), GridError> {
        let (height, width) = self.size();
        let (rows, columns) = grid.dimensions();
        if origin.0 + height > rows || origin.1 + width > columns {
            return Err(GridError::PatternTooLarge {
                name: self.name,
                height,
                width,
                rows,
                columns,
            });
        }
        for &(r, c) in self.cells {
            grid.set(origin.0 + r, origin.1 + c, CellState::Alive)?;
        }
        Ok(())
    }

    /// Stamps the pattern in the middle of `grid`.
    pub fn place_centered(&self, grid: &mut Grid) -> Result<(), GridError> {
        let (height, width) = self.size();
        let (rows, columns) = grid.dimensions();
        let origin = (rows.saturating_sub(height) / 2, columns.saturating_sub(width) / 2);
        self.place(grid, origin)
    }
}

/// Clears `grid` and centres `pattern` on it.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> Result<(), GridError> {
    grid.clear();
    pattern.place_centered(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_separators() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(find("r_pentomino").map(|p| p.name), Some("R-pentomino"));
        assert_eq!(find("gosper-glider-gun").map(|p| p.name), Some("Gosper Glider Gun"));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn sizes() {
        assert_eq!(find("blinker").unwrap().size(), (1, 3));
        assert_eq!(find("pulsar").unwrap().size(), (13, 13));
        assert_eq!(find("gosper glider gun").unwrap().size(), (9, 36));
    }

    #[test]
    fn pattern_cells_are_unique() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{} repeats a cell", pattern.name);
        }
    }

    #[test]
    fn centred_placement() {
        let mut grid = Grid::from_cells(5, 5, &[(0, 0)]).unwrap();
        apply_pattern(&mut grid, find("blinker").unwrap()).unwrap();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn too_large_pattern_leaves_grid_untouched() {
        let mut grid = Grid::new(5, 5).unwrap();
        let err = find("pulsar").unwrap().place_centered(&mut grid).unwrap_err();
        assert!(matches!(err, GridError::PatternTooLarge { name: "Pulsar", .. }));
        assert_eq!(grid.population(), 0);
    }
}
