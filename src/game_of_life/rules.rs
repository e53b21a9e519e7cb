//! Conway's B3/S23 rules

use super::Grid;
use rayon::prelude::*;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation.
    ///
    /// Every cell is decided from `current` alone and written into a fresh
    /// grid; `current` is never modified.
    pub fn evolve(current: &Grid) -> Grid {
        let width = current.width();
        let cells = (0..current.height() * width)
            .map(|idx| Self::next_state(current, idx / width, idx % width))
            .collect();
        current.with_cells(cells)
    }

    /// Same result as [`evolve`](Self::evolve), with rows computed on the rayon pool
    pub fn evolve_parallel(current: &Grid) -> Grid {
        let width = current.width();
        let cells = (0..current.height())
            .into_par_iter()
            .flat_map_iter(|row| (0..width).map(move |col| Self::next_state(current, row, col)))
            .collect();
        current.with_cells(cells)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    #[inline]
    fn next_state(current: &Grid, row: usize, col: usize) -> bool {
        Self::should_be_alive(current.get(row, col), current.count_neighbors(row, col))
    }

    /// Whether a cell is alive next generation given its state and live neighbor count
    pub fn should_be_alive(alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            (true, 2) | (true, 3) => true, // survival
            (false, 3) => true,            // birth
            _ => false,                    // under/overpopulation, or stays dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|row| row.chars().map(|c| c == '#').collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_still_life_block() {
        let block = grid(&["....", ".##.", ".##.", "...."]);
        assert_eq!(GameOfLifeRules::evolve(&block), block);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = grid(&[".....", ".....", ".###.", ".....", "....."]);
        let vertical = grid(&[".....", "..#..", "..#..", "..#..", "....."]);

        let once = GameOfLifeRules::evolve(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(GameOfLifeRules::evolve(&once), horizontal);
        assert_eq!(GameOfLifeRules::evolve_generations(horizontal.clone(), 2), horizontal);
    }

    #[test]
    fn test_births_across_the_wrap() {
        // Blinker lying on the top edge: its rotation spans the bottom row.
        let edge = grid(&[".###.", ".....", ".....", ".....", "....."]);
        let expected = grid(&["..#..", "..#..", ".....", ".....", "..#.."]);
        assert_eq!(GameOfLifeRules::evolve(&edge), expected);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let gun = grid(&[
            "..........",
            "...#......",
            "....#.....",
            "..###.....",
            "..........",
            "......##..",
            "......##..",
        ]);
        let mut seq = gun.clone();
        let mut par = gun;
        for _ in 0..12 {
            seq = GameOfLifeRules::evolve(&seq);
            par = GameOfLifeRules::evolve_parallel(&par);
            assert_eq!(seq, par);
        }
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
        assert!(!GameOfLifeRules::should_be_alive(false, 4));
        for n in 0..=8 {
            assert_eq!(GameOfLifeRules::should_be_alive(false, n), n == 3);
        }
    }
}
