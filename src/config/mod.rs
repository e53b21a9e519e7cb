//! Configuration management for the simulation host loop

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, OutputConfig, OutputFormat, SeedSource, Settings,
    SimulationConfig,
};
