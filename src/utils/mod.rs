//! Output helpers for the command line host

pub mod display;

pub use display::{format_grid_with_coords, ColorOutput, FrameRenderer};
