//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;
pub mod session;

pub use grid::Grid;
pub use io::{create_example_grids, load_grid_from_file, save_grid_to_file, GridSnapshot};
pub use patterns::Pattern;
pub use rules::GameOfLifeRules;
pub use session::Simulation;
