//! Pattern files: loading, saving and placing patterns on a simulation

use super::{Grid, Simulation};
use crate::error::LifeError;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Load a pattern from a text file.
/// Format: each line is a row, `1` for alive cells and `0` for dead cells.
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern_from_string(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a pattern from its text representation
pub fn parse_pattern_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let mut cells = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(col_idx, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    col_idx,
                    row_idx
                ),
            })
            .collect::<Result<Vec<bool>>>()?;
        cells.push(row);
    }

    Ok(Grid::from_cells(cells)?)
}

/// Convert a grid to its text representation
pub fn grid_to_string(grid: &Grid) -> String {
    let (width, height) = grid.dimensions();
    let mut result = String::with_capacity(height * (width + 1));

    for y in 0..height {
        for x in 0..width {
            result.push(if grid.cell(x, y) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid_to_string(grid))
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Copy the live cells of `pattern` into `sim` with its top-left corner at
/// `(offset_x, offset_y)`.
///
/// Dead pattern cells leave the simulation untouched. If any live cell would
/// land off the grid nothing is written.
pub fn stamp_pattern(
    sim: &mut Simulation,
    pattern: &Grid,
    offset_x: isize,
    offset_y: isize,
) -> Result<(), LifeError> {
    let (width, height) = sim.dimensions();
    let out_of_bounds = |x: isize, y: isize| LifeError::OutOfBounds { x, y, width, height };

    let mut targets = Vec::with_capacity(pattern.living_count());
    for (px, py) in pattern.living_cells() {
        // An offset overflowing isize lands off any grid
        let x = offset_x.checked_add(px as isize).unwrap_or(isize::MAX);
        let y = offset_y.checked_add(py as isize).unwrap_or(isize::MAX);
        if !sim.grid().contains(x, y) {
            return Err(out_of_bounds(x, y));
        }
        targets.push((x, y));
    }

    for (x, y) in targets {
        sim.set_cell(x, y, true)?;
    }
    debug!(
        cells = pattern.living_count(),
        offset_x, offset_y, "pattern stamped"
    );
    Ok(())
}

/// Write the bundled example patterns into `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        ("glider.txt", "00100\n10100\n01100\n00000\n00000\n"),
        ("blinker.txt", "00000\n00000\n01110\n00000\n00000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "110000\n110000\n001100\n001100\n"),
    ];

    for (name, content) in patterns {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_pattern_from_string() {
        let grid = parse_pattern_from_string("010\n101\n010\n").unwrap();

        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.living_count(), 4);
        assert!(grid.get(1, 0).unwrap());
        assert!(grid.get(0, 1).unwrap());
        assert!(grid.get(2, 1).unwrap());
        assert!(grid.get(1, 2).unwrap());
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_padding() {
        let grid = parse_pattern_from_string("\n  0110 \n\n1001\n\n").unwrap();
        assert_eq!(grid.dimensions(), (4, 2));
        assert_eq!(grid_to_string(&grid), "0110\n1001\n");
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_pattern_from_string("010\n1X1\n010\n").is_err());
        assert!(parse_pattern_from_string("010\n11\n010\n").is_err());
        assert!(parse_pattern_from_string("").is_err());
        assert!(parse_pattern_from_string("\n   \n").is_err());
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/pattern.txt");

        let original = Grid::from_cells(vec![
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();
        save_grid_to_file(&original, &file_path).unwrap();

        let loaded = load_pattern_from_file(&file_path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = load_pattern_from_file(temp_dir.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read pattern file"));
    }

    #[test]
    fn test_stamp_pattern_with_offset() {
        let mut sim = Simulation::new(10, 8).unwrap();
        let glider = parse_pattern_from_string("010\n001\n111\n").unwrap();

        stamp_pattern(&mut sim, &glider, 4, 3).unwrap();
        let mut living = sim.grid().living_cells();
        living.sort();
        assert_eq!(living, vec![(4, 5), (5, 3), (5, 5), (6, 4), (6, 5)]);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_stamp_pattern_out_of_bounds_is_atomic() {
        let mut sim = Simulation::new(4, 4).unwrap();
        let row = parse_pattern_from_string("111\n").unwrap();

        let err = stamp_pattern(&mut sim, &row, 2, 0).unwrap_err();
        assert_eq!(err, LifeError::OutOfBounds { x: 4, y: 0, width: 4, height: 4 });
        assert!(sim.grid().is_empty());

        assert!(stamp_pattern(&mut sim, &row, -1, 0).is_err());
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn test_stamp_pattern_extreme_offset() {
        let mut sim = Simulation::new(4, 4).unwrap();
        let pattern = parse_pattern_from_string("01\n").unwrap();

        let err = stamp_pattern(&mut sim, &pattern, isize::MAX, 0).unwrap_err();
        assert!(matches!(err, LifeError::OutOfBounds { y: 0, .. }));
        assert!(stamp_pattern(&mut sim, &pattern, 0, isize::MAX).is_err());
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn test_dead_pattern_cells_may_overhang() {
        let mut sim = Simulation::new(3, 3).unwrap();
        let pattern = parse_pattern_from_string("1000\n0000\n").unwrap();
        stamp_pattern(&mut sim, &pattern, 2, 2).unwrap();
        assert!(sim.get_cell_state(2, 2).unwrap());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let glider = load_pattern_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.dimensions(), (5, 5));
        assert_eq!(glider.living_count(), 5);
    }
}
