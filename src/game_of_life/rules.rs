//! Conway's B3/S23 transition rule

use super::neighbors::count_live_neighbors;
use super::Grid;
use itertools::iproduct;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Whether a cell in `current_state` with `neighbor_count` live
    /// neighbours changes state this generation.
    ///
    /// Live cells die on 1 or fewer and on 4 or more neighbours; dead cells
    /// are born on exactly 3.
    pub fn should_flip(current_state: bool, neighbor_count: u8) -> bool {
        if current_state {
            neighbor_count <= 1 || neighbor_count >= 4
        } else {
            neighbor_count == 3
        }
    }

    /// State of a cell in the next generation
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        current_state != Self::should_flip(current_state, neighbor_count)
    }

    /// Neighbour counts that bring a dead cell to life
    pub fn birth_neighbor_counts() -> Vec<u8> {
        vec![3]
    }

    /// Neighbour counts that keep a live cell alive
    pub fn survival_neighbor_counts() -> Vec<u8> {
        vec![2, 3]
    }

    /// Double-buffered evolution: build the whole next grid from `current`.
    ///
    /// The engine uses a pending-flip buffer instead; this is the reference
    /// it must agree with.
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        for (y, x) in iproduct!(0..current.height(), 0..current.width()) {
            let neighbors = count_live_neighbors(current, x, y);
            next.put_cell(x, y, Self::should_be_alive(current.cell(x, y), neighbors));
        }
        next
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
    }

    #[test]
    fn test_flip_table() {
        for n in 0..=8u8 {
            let live_flips = GameOfLifeRules::should_flip(true, n);
            let dead_flips = GameOfLifeRules::should_flip(false, n);
            assert_eq!(live_flips, !GameOfLifeRules::survival_neighbor_counts().contains(&n));
            assert_eq!(dead_flips, GameOfLifeRules::birth_neighbor_counts().contains(&n));
        }
    }

    #[test]
    fn test_still_life_block() {
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(GameOfLifeRules::evolve(&grid), grid);
    }

    #[test]
    fn test_oscillator_blinker() {
        let cells = vec![
            vec![false, false, false],
            vec![true, true, true],
            vec![false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);

        let expected = Grid::from_cells(vec![
            vec![false, true, false],
            vec![false, true, false],
            vec![false, true, false],
        ])
        .unwrap();
        assert_eq!(evolved, expected);
        assert_eq!(GameOfLifeRules::evolve_generations(grid.clone(), 2), grid);
    }
}
