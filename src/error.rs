//! Error types for the grid engine

use thiserror::Error;

/// Errors raised while building or seeding a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("coordinate ({row}, {col}) out of bounds for {height}x{width} grid")]
    CoordinateOutOfBounds {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
}

pub type GridResult<T> = std::result::Result<T, GridError>;
