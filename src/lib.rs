//! Conway's Game of Life on a toroidal grid
//!
//! The engine lives in [`game_of_life`]: a fixed-size grid whose edges wrap,
//! the B3/S23 step function, and a [`Simulation`] session that owns the grid
//! between ticks. Configuration and terminal rendering for the command line
//! host sit alongside it.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::{GridError, GridResult};
pub use game_of_life::{GameOfLifeRules, Grid, Simulation};

use anyhow::{Context, Result};
use config::SeedSource;
use game_of_life::{load_grid_from_file, patterns};

/// Build a seeded simulation from validated settings
pub fn build_simulation(settings: &Settings) -> Result<Simulation> {
    let sim = &settings.simulation;
    let simulation = match sim.seed_source() {
        SeedSource::Pattern(name) => {
            let pattern = patterns::find(name)
                .with_context(|| format!("Unknown pattern '{}'", name))?;
            Simulation::with_pattern(sim.height, sim.width, pattern)
                .with_context(|| format!("Failed to seed pattern '{}'", pattern.name))?
        }
        SeedSource::File(path) => {
            let grid = load_grid_from_file(path)?;
            if (grid.height(), grid.width()) != (sim.height, sim.width) {
                anyhow::bail!(
                    "Seed file {} is {}x{}, configured grid is {}x{}",
                    path.display(),
                    grid.height(),
                    grid.width(),
                    sim.height,
                    sim.width
                );
            }
            Simulation::from_grid(grid)
        }
        SeedSource::Empty => Simulation::new(sim.height, sim.width)?,
    };
    Ok(simulation.parallel(sim.parallel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_of_life::save_grid_to_file;
    use tempfile::tempdir;

    #[test]
    fn test_build_from_default_settings() {
        let simulation = build_simulation(&Settings::default()).unwrap();
        assert_eq!((simulation.height(), simulation.width()), (60, 60));
        assert_eq!(
            simulation.grid().living_count(),
            patterns::GOSPER_GLIDER_GUN.cell_count()
        );
    }

    #[test]
    fn test_build_from_seed_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("start.txt");
        let mut grid = Grid::new(6, 7).unwrap();
        grid.seed_from_coordinates([(1, 1), (2, 2)]).unwrap();
        save_grid_to_file(&grid, &path).unwrap();

        let mut settings = Settings::default();
        settings.simulation.seed_file = Some(path);
        settings.simulation.height = 6;
        settings.simulation.width = 7;
        assert_eq!(build_simulation(&settings).unwrap().grid(), &grid);

        settings.simulation.width = 8;
        assert!(build_simulation(&settings).is_err());
    }

    #[test]
    fn test_build_empty() {
        let mut settings = Settings::default();
        settings.simulation.pattern = None;
        assert!(build_simulation(&settings).unwrap().grid().is_empty());
    }
}
