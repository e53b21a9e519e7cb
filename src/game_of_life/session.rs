//! Simulation session: the single owner of the evolving grid

use super::{GameOfLifeRules, Grid, Pattern};
use crate::error::GridResult;
use tracing::{debug, trace};

/// Couples a grid with its generation counter.
///
/// The session holds the only mutable handle on the grid. Each [`tick`]
/// swaps in a freshly computed generation, so a grid borrowed or cloned from
/// [`grid`] stays valid as a snapshot of the previous state.
///
/// [`tick`]: Simulation::tick
/// [`grid`]: Simulation::grid
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    parallel: bool,
}

impl Simulation {
    /// Start an all-dead simulation
    pub fn new(height: usize, width: usize) -> GridResult<Self> {
        Ok(Self::from_grid(Grid::new(height, width)?))
    }

    /// Start a simulation seeded with a named pattern
    pub fn with_pattern(height: usize, width: usize, pattern: &Pattern) -> GridResult<Self> {
        let mut grid = Grid::new(height, width)?;
        grid.seed_from_coordinates(pattern.coords())?;
        debug!(
            pattern = pattern.name,
            cells = pattern.cell_count(),
            height,
            width,
            "seeded simulation"
        );
        Ok(Self::from_grid(grid))
    }

    /// Start from an existing grid as generation 0
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            parallel: false,
        }
    }

    /// Compute generations on the rayon pool
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Advance one generation, replacing the grid wholesale
    pub fn tick(&mut self) -> &Grid {
        self.grid = if self.parallel {
            GameOfLifeRules::evolve_parallel(&self.grid)
        } else {
            GameOfLifeRules::evolve(&self.grid)
        };
        self.generation += 1;
        trace!(
            generation = self.generation,
            living = self.grid.living_count(),
            "tick"
        );
        &self.grid
    }

    /// Advance `generations` ticks
    pub fn run(&mut self, generations: u64) -> &Grid {
        for _ in 0..generations {
            self.tick();
        }
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::patterns::{BLINKER, GLIDER, GOSPER_GLIDER_GUN};

    #[test]
    fn test_new_is_empty() {
        let sim = Simulation::new(6, 8).unwrap();
        assert_eq!((sim.height(), sim.width()), (6, 8));
        assert_eq!(sim.generation(), 0);
        assert!(sim.grid().is_empty());
        assert!(Simulation::new(0, 8).is_err());
    }

    #[test]
    fn test_pattern_must_fit() {
        assert!(Simulation::with_pattern(10, 10, &GOSPER_GLIDER_GUN).is_err());
        assert!(Simulation::with_pattern(60, 60, &GOSPER_GLIDER_GUN).is_ok());
    }

    #[test]
    fn test_tick_keeps_previous_snapshot() {
        let mut sim = Simulation::with_pattern(5, 5, &BLINKER).unwrap();
        let before = sim.grid().clone();

        sim.tick();
        assert_eq!(sim.generation(), 1);
        assert_ne!(sim.grid(), &before);

        sim.tick();
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_glider_wraps_back_home() {
        // On an 8x8 torus a glider returns to its start after 4 * 8 generations.
        let mut sim = Simulation::with_pattern(8, 8, &GLIDER).unwrap();
        let start = sim.grid().clone();
        sim.run(32);
        assert_eq!(sim.grid(), &start);
        assert_eq!(sim.generation(), 32);
    }

    #[test]
    fn test_parallel_session_matches() {
        let mut seq = Simulation::with_pattern(40, 40, &GOSPER_GLIDER_GUN).unwrap();
        let mut par = seq.clone().parallel(true);
        assert_eq!(seq.run(45), par.run(45));
    }
}
