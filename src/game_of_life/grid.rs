//! Bounded grid of alive/dead cells

use crate::error::LifeError;
use std::fmt;

/// A fixed-size rectangular Game of Life grid.
///
/// Cells are stored row-major. `x` is the column and `y` the row. Every
/// coordinate passed in from outside is signed so that negative input is
/// reported as [`LifeError::OutOfBounds`] instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(LifeError::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Create a grid from rows of booleans
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }

        for (row, line) in cells.iter().enumerate() {
            if line.len() != width {
                return Err(LifeError::RaggedRows {
                    row,
                    len: line.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether `(x, y)` names a cell of this grid
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn checked_index(&self, x: isize, y: isize) -> Result<usize, LifeError> {
        if self.contains(x, y) {
            Ok(self.index(x as usize, y as usize))
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Alive state at `(x, y)`
    pub fn get(&self, x: isize, y: isize) -> Result<bool, LifeError> {
        self.checked_index(x, y).map(|idx| self.cells[idx])
    }

    /// Overwrite the state at `(x, y)`
    pub fn set(&mut self, x: isize, y: isize, alive: bool) -> Result<(), LifeError> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip the state at `(x, y)`
    pub fn toggle(&mut self, x: isize, y: isize) -> Result<(), LifeError> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// Unchecked read for coordinates already known to be in bounds.
    /// Callers inside the crate iterate `0..width` / `0..height`.
    #[inline]
    pub(crate) fn cell(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub(crate) fn put_cell(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// A fresh all-dead grid with width and height exchanged.
    /// The current pattern is not carried over.
    pub fn swapped(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            cells: vec![false; self.width * self.height],
        }
    }

    /// Coordinates of every living cell, ordered by row then column
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| (idx % self.width, idx / self.width))
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &cell in row {
                write!(f, "{}", if cell { "⬛" } else { "⬜" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.living_count(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimension { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::from_cells(vec![]).is_err());
        assert!(Grid::from_cells(vec![vec![]]).is_err());
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let width = usize::MAX / 2 + 1;
        assert_eq!(
            Grid::new(width, 2),
            Err(LifeError::InvalidDimension { width, height: 2 })
        );
        assert!(Grid::new(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.living_count(), 3);
        assert!(grid.get(2, 0).unwrap());
        assert!(grid.get(1, 1).unwrap());
        assert!(!grid.get(0, 1).unwrap());
    }

    #[test]
    fn test_ragged_rows() {
        let cells = vec![vec![true, false], vec![true]];
        assert_eq!(
            Grid::from_cells(cells),
            Err(LifeError::RaggedRows { row: 1, len: 1, expected: 2 })
        );
    }

    #[test]
    fn test_set_and_toggle() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 2, true).unwrap();
        assert!(grid.get(1, 2).unwrap());

        grid.toggle(1, 2).unwrap();
        assert!(!grid.get(1, 2).unwrap());
        grid.toggle(0, 0).unwrap();
        assert!(grid.get(0, 0).unwrap());
    }

    #[test]
    fn test_out_of_bounds_leaves_grid_untouched() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(0, 0, true).unwrap();
        let before = grid.clone();

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2)] {
            assert!(matches!(grid.get(x, y), Err(LifeError::OutOfBounds { .. })));
            assert!(grid.set(x, y, true).is_err());
            assert!(grid.toggle(x, y).is_err());
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clear_and_swapped() {
        let mut grid = Grid::new(5, 2).unwrap();
        grid.set(4, 1, true).unwrap();

        let swapped = grid.swapped();
        assert_eq!(swapped.dimensions(), (2, 5));
        assert!(swapped.is_empty());

        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (5, 2));
    }

    #[test]
    fn test_living_cells_order() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(2, 0, true).unwrap();
        grid.set(0, 2, true).unwrap();
        grid.set(1, 1, true).unwrap();
        assert_eq!(grid.living_cells(), vec![(2, 0), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, 0, true).unwrap();
        assert_eq!(grid.to_string(), "⬜⬛\n⬜⬜\n");
    }
}
