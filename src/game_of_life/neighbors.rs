//! Moore-neighbourhood counting on a bounded grid

use super::Grid;
use crate::error::LifeError;
use itertools::iproduct;

/// Count living cells among the 8 neighbours of `(x, y)`.
///
/// Neighbours that fall outside the grid do not exist and contribute 0; the
/// grid does not wrap. `(x, y)` must be in bounds.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (width, height) = grid.dimensions();

    iproduct!(-1isize..=1, -1isize..=1)
        .filter(|&(dx, dy)| !(dx == 0 && dy == 0))
        .filter_map(|(dx, dy)| {
            let nx = x.checked_add_signed(dx).filter(|&nx| nx < width)?;
            let ny = y.checked_add_signed(dy).filter(|&ny| ny < height)?;
            Some((nx, ny))
        })
        .filter(|&(nx, ny)| grid.cell(nx, ny))
        .count() as u8
}

/// Checked variant of [`count_live_neighbors`] for caller-supplied coordinates
pub fn try_count_live_neighbors(grid: &Grid, x: isize, y: isize) -> Result<u8, LifeError> {
    // Surface the bounds failure with the grid's own error
    grid.get(x, y)?;
    Ok(count_live_neighbors(grid, x as usize, y as usize))
}
