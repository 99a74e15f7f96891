// simulation.rs - Drives the transition engine across generations

use crate::config::SimulationConfig;
use crate::cycle::CycleDetector;
use crate::display::DisplayClearer;
use crate::error::{ConfigError, Result};
use crate::grid::Grid;
use crate::render::Renderer;
use crate::rules;
use log::{debug, info, trace};
use std::time::Duration;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Rendering,
    Transitioning,
    Done,
}

/// Double-buffered Game of Life run.
///
/// The current generation is read-only while the next one is written into a
/// second buffer of the same size; the two are swapped after every full pass.
pub struct Simulation {
    current: Grid,
    next: Grid,
    generation: u64,
    phase: Phase,
    frame_delay: Duration,
    halt_on_cycle: bool,
    cycles: CycleDetector,
}

impl Simulation {
    /// Starts a run from a supplied board.
    pub fn new(grid: Grid) -> Self {
        let next = grid.clone();
        Self {
            current: grid,
            next,
            generation: 0,
            phase: Phase::Initializing,
            frame_delay: Duration::ZERO,
            halt_on_cycle: false,
            cycles: CycleDetector::new(),
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let grid = config.initial_grid()?;
        Ok(Self::new(grid)
            .with_frame_delay(config.frame_delay)
            .with_halt_on_cycle(config.halt_on_cycle))
    }

    /// Pause inserted before each streamed transition.
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn with_halt_on_cycle(mut self, enabled: bool) -> Self {
        self.halt_on_cycle = enabled;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Replaces the board and starts counting from generation 0 again.
    ///
    /// The new board may have different dimensions from the old one.
    pub fn reset(&mut self, grid: Grid) {
        self.next = grid.clone();
        self.current = grid;
        self.generation = 0;
        self.phase = Phase::Initializing;
        self.cycles.reset();
    }

    /// Edits the current board in place, e.g. to toggle cells between runs.
    ///
    /// If `f` replaces the board with one of a different size, the scratch
    /// buffer is resized to match.
    pub fn edit<T>(&mut self, f: impl FnOnce(&mut Grid) -> T) -> T {
        let result = f(&mut self.current);
        if self.current.dimensions() != self.next.dimensions() {
            debug!("board resized to {:?}", self.current.dimensions());
            self.next = self.current.clone();
        }
        self.cycles.reset();
        result
    }

    /// Advances exactly one generation without rendering it.
    ///
    /// Outside of `run` and `stream` this leaves [`phase`](Self::phase) unchanged.
    pub fn step(&mut self) -> u64 {
        let phase = self.phase;
        self.advance();
        self.phase = phase;
        self.generation
    }

    fn advance(&mut self) {
        self.phase = Phase::Transitioning;
        rules::fill_next(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!("generation {} population {}", self.generation, self.current.population());
    }

    /// Remembers the current board and reports whether it repeats one of the
    /// last few generations.
    pub fn observe_cycle(&mut self) -> bool {
        self.cycles.observe(&self.current)
    }

    /// Renders the current board, then transitions and renders `times` more times.
    pub fn run(&mut self, times: u64, renderer: &mut impl Renderer) -> Result<()> {
        debug!("bounded run of {times} transitions on a {:?} board", self.current.dimensions());
        self.render(renderer)?;
        for _ in 0..times {
            self.advance();
            self.render(renderer)?;
        }
        self.phase = Phase::Done;
        info!("finished after {} generations", self.generation);
        Ok(())
    }

    /// Streams generations until the process is interrupted.
    ///
    /// Only returns early if a collaborator fails, or if halt-on-cycle is
    /// enabled and the board repeats.
    pub fn stream(&mut self, renderer: &mut impl Renderer, clearer: &mut impl DisplayClearer) -> Result<()> {
        self.stream_while(renderer, clearer, |_, _| true)
    }

    /// Like [`stream`](Self::stream), but asks `keep_going` after every
    /// rendered generation whether to continue.
    pub fn stream_while(
        &mut self,
        renderer: &mut impl Renderer,
        clearer: &mut impl DisplayClearer,
        mut keep_going: impl FnMut(&Grid, u64) -> bool,
    ) -> Result<()> {
        debug!("streaming a {:?} board", self.current.dimensions());
        clearer.clear()?;
        self.render(renderer)?;
        if self.halt_on_cycle {
            self.observe_cycle();
        }

        while keep_going(&self.current, self.generation) {
            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }
            clearer.clear()?;
            self.advance();
            self.render(renderer)?;

            if self.halt_on_cycle && self.observe_cycle() {
                info!("generation {} repeats a recent board, halting", self.generation);
                break;
            }
        }
        self.phase = Phase::Done;
        Ok(())
    }

    fn render(&mut self, renderer: &mut impl Renderer) -> Result<()> {
        self.phase = Phase::Rendering;
        renderer.render(&self.current, self.generation)?;
        Ok(())
    }
}
