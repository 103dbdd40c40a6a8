//! Generation update engine
//!
//! [`Simulation`] is the single piece of session state: it owns the grid,
//! the pending-flip buffer and the generation counter. A step runs in two
//! phases. The evaluation pass reads the stable prior-generation grid and
//! records every cell that must change; the apply pass then toggles exactly
//! those cells. No cell's new state can leak into a neighbour's count within
//! the same generation.

use super::neighbors::count_live_neighbors;
use super::{GameOfLifeRules, Grid};
use crate::error::LifeError;
use itertools::iproduct;
use serde::Serialize;
use tracing::{debug, trace};

/// Generation number of a freshly created, cleared or resized simulation
pub const FIRST_GENERATION: u64 = 1;

/// Where the engine is in its step cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Evaluating,
    Applying,
}

/// Owned simulation state: grid, pending flips and generation
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    pending_flips: Vec<(usize, usize)>,
    generation: u64,
    phase: Phase,
}

impl Simulation {
    /// Start a session on an all-dead `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let grid = Grid::new(width, height)?;
        debug!(width, height, "simulation created");
        Ok(Self::from_grid(grid))
    }

    /// Start a session from an existing grid at the first generation
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            pending_flips: Vec::new(),
            generation: FIRST_GENERATION,
            phase: Phase::Idle,
        }
    }

    /// Replace the grid with a fresh all-dead one
    pub fn init_grid(&mut self, width: usize, height: usize) -> Result<(), LifeError> {
        self.grid = Grid::new(width, height)?;
        self.pending_flips.clear();
        self.generation = FIRST_GENERATION;
        debug!(width, height, "grid initialised");
        Ok(())
    }

    /// Advance one generation and return the new generation number.
    pub fn step(&mut self) -> Result<u64, LifeError> {
        self.evaluate();
        let applied = self.apply();
        self.phase = Phase::Idle;
        let flips = applied?;

        self.generation += 1;
        debug!(generation = self.generation, flips, "step complete");
        Ok(self.generation)
    }

    /// Run `count` steps, stopping at the first failure
    pub fn step_n(&mut self, count: usize) -> Result<u64, LifeError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(self.generation)
    }

    fn evaluate(&mut self) {
        self.phase = Phase::Evaluating;
        self.pending_flips.clear();

        let grid = &self.grid;
        for (y, x) in iproduct!(0..grid.height(), 0..grid.width()) {
            let alive = grid.cell(x, y);
            let neighbors = count_live_neighbors(grid, x, y);
            if GameOfLifeRules::should_flip(alive, neighbors) {
                if alive {
                    trace!(x, y, neighbors, "killing cell");
                } else {
                    trace!(x, y, neighbors, "spawning cell");
                }
                self.pending_flips.push((x, y));
            }
        }
    }

    /// Drain the pending flips into the grid.
    ///
    /// Flips are validated before any is applied so a bad coordinate leaves
    /// the grid exactly as the evaluation pass saw it.
    fn apply(&mut self) -> Result<usize, LifeError> {
        self.phase = Phase::Applying;

        let stray = self
            .pending_flips
            .iter()
            .copied()
            .find(|&(x, y)| !self.grid.contains(x as isize, y as isize));
        if let Some((x, y)) = stray {
            self.pending_flips.clear();
            return Err(LifeError::OutOfBounds {
                x: x as isize,
                y: y as isize,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        let count = self.pending_flips.len();
        for (x, y) in self.pending_flips.drain(..) {
            self.grid.toggle(x as isize, y as isize)?;
        }
        Ok(count)
    }

    /// Flip one cell immediately, outside the step cycle.
    /// Pending flips and the generation are untouched.
    pub fn toggle_cell(&mut self, x: isize, y: isize) -> Result<(), LifeError> {
        self.grid.toggle(x, y)?;
        trace!(x, y, "cell toggled");
        Ok(())
    }

    /// Overwrite one cell immediately, outside the step cycle
    pub fn set_cell(&mut self, x: isize, y: isize, alive: bool) -> Result<(), LifeError> {
        self.grid.set(x, y, alive)
    }

    /// Kill every cell and restart at the first generation
    pub fn clear(&mut self) {
        self.grid.clear();
        self.pending_flips.clear();
        self.generation = FIRST_GENERATION;
        debug!("simulation cleared");
    }

    /// Swap width and height. The pattern is discarded: every cell comes
    /// back dead and the generation restarts.
    pub fn resize_swap_dimensions(&mut self) {
        self.grid = self.grid.swapped();
        self.pending_flips.clear();
        self.generation = FIRST_GENERATION;
        let (width, height) = self.grid.dimensions();
        debug!(width, height, "dimensions swapped");
    }

    pub fn get_cell_state(&self, x: isize, y: isize) -> Result<bool, LifeError> {
        self.grid.get(x, y)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Read-only view for renderers
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of flips waiting to be applied; zero between steps
    pub fn pending_flip_count(&self) -> usize {
        self.pending_flips.len()
    }
}
