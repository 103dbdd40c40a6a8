//! Error types for the simulation core and its scheduler

use thiserror::Error;

/// Failures raised by the grid and the update engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },

    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Failures raised by the step scheduler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// A timed run is active; manual steps and rate changes are refused.
    #[error("a timed run is active")]
    Busy,

    #[error(transparent)]
    Step(#[from] LifeError),
}
