//! Text rendering of simulations for terminals

use crate::config::OutputFormat;
use crate::game_of_life::{Grid, Simulation};
use anyhow::Result;
use serde::Serialize;

/// Serializable view of a simulation at one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub generation: u64,
    pub width: usize,
    pub height: usize,
    pub living: Vec<(usize, usize)>,
}

impl Snapshot {
    pub fn capture(sim: &Simulation) -> Self {
        let (width, height) = sim.dimensions();
        Self {
            generation: sim.generation(),
            width,
            height,
            living: sim.grid().living_cells(),
        }
    }
}

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// One character per cell
    pub fn format_grid_compact(grid: &Grid) -> String {
        let (width, height) = grid.dimensions();
        let mut output = String::with_capacity(height * (width + 1));
        for y in 0..height {
            for x in 0..width {
                output.push(if grid.cell(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Grid with column and row numbers
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let (width, height) = grid.dimensions();
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..width {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..height {
            output.push_str(&format!("{:2} ", y));
            for x in 0..width {
                output.push_str(if grid.cell(x, y) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Generation header followed by the compact grid
    pub fn format_frame(sim: &Simulation) -> String {
        let (width, height) = sim.dimensions();
        format!(
            "Generation {} ({}x{}, living: {})\n{}",
            sim.generation(),
            width,
            height,
            sim.grid().living_count(),
            Self::format_grid_compact(sim.grid())
        )
    }

    /// Render `sim` in the requested output format
    pub fn render(sim: &Simulation, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_frame(sim)),
            OutputFormat::Json => Ok(serde_json::to_string(&Snapshot::capture(sim))?),
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
