// cycle.rs - Detects boards that repeat a recent generation

use crate::grid::Grid;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// How many recent generations are remembered.
pub const HISTORY_LEN: usize = 10;

/// Ring buffer of recent board hashes.
///
/// Still lifes are caught on the generation after they settle and
/// oscillators with a period up to [`HISTORY_LEN`] once they repeat.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid` and reports whether it matches one of the remembered boards.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let seen = self.history[..self.count.min(HISTORY_LEN)].contains(&hash);
        if !seen {
            self.history[self.count % HISTORY_LEN] = hash;
            self.count += 1;
        }
        seen
    }

    pub fn reset(&mut self) {
        self.history = [0; HISTORY_LEN];
        self.count = 0;
    }
}

pub fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::transition;

    #[test]
    fn still_life_repeats_immediately() {
        let block = Grid::from_cells(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
        let mut detector = CycleDetector::new();
        assert!(!detector.observe(&block));
        assert!(detector.observe(&transition(&block)));
    }

    #[test]
    fn blinker_repeats_after_two() {
        let blinker = Grid::from_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        let mut detector = CycleDetector::new();
        let next = transition(&blinker);
        assert!(!detector.observe(&blinker));
        assert!(!detector.observe(&next));
        assert!(detector.observe(&transition(&next)));
    }

    #[test]
    fn empty_history_never_matches() {
        // A zeroed slot must not be mistaken for a board whose hash happens to be 0.
        let mut detector = CycleDetector::new();
        let grid = Grid::new(2, 2).unwrap();
        assert!(!detector.observe(&grid));
        detector.reset();
        assert!(!detector.observe(&grid));
    }
}
