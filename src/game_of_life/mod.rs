//! Game of Life core functionality

pub mod engine;
pub mod grid;
pub mod io;
pub mod neighbors;
pub mod rules;

pub use engine::{Phase, Simulation, FIRST_GENERATION};
pub use grid::Grid;
pub use io::{create_example_patterns, load_pattern_from_file, save_grid_to_file, stamp_pattern};
pub use neighbors::{count_live_neighbors, try_count_live_neighbors};
pub use rules::GameOfLifeRules;
