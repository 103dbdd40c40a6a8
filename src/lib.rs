//! Bounded Game of Life simulator
//!
//! The core is [`game_of_life::Simulation`]: a bounded, non-wrapping grid
//! advanced one synchronous generation at a time. Scheduling, pattern files
//! and text rendering are layered on top and never reached into by the core.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod scheduler;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, SchedulerError};
pub use game_of_life::{Grid, Simulation};
pub use scheduler::{Scheduler, StepRate};

use anyhow::{Context, Result};
use game_of_life::{load_pattern_from_file, stamp_pattern};

/// Build the simulation described by `settings`: grid of the configured
/// (possibly swapped) dimensions with the pattern file stamped in.
pub fn build_simulation(settings: &Settings) -> Result<Simulation> {
    let (width, height) = settings.grid.effective_dimensions();
    let mut sim = Simulation::new(width, height)?;

    if let Some(ref path) = settings.input.pattern_file {
        let pattern = load_pattern_from_file(path)?;
        stamp_pattern(&mut sim, &pattern, settings.input.offset_x, settings.input.offset_y)
            .with_context(|| format!("Pattern {} does not fit the grid", path.display()))?;
    }

    Ok(sim)
}
