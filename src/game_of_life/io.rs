//! File I/O operations for Game of Life grids

use super::{patterns, Grid};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Load a grid from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Grid file is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(col_idx, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    Ok(Grid::from_rows(rows)?)
}

/// Convert a grid to string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height() * (grid.width() + 1));
    for row in grid.rows() {
        result.extend(row.iter().map(|&cell| if cell { '1' } else { '0' }));
        result.push('\n');
    }
    result
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    write_creating_parent(path.as_ref(), grid_to_string(grid))
}

/// JSON form of a grid at a given generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub generation: u64,
    pub height: usize,
    pub width: usize,
    pub living: Vec<(usize, usize)>,
}

impl GridSnapshot {
    pub fn capture(grid: &Grid, generation: u64) -> Self {
        Self {
            generation,
            height: grid.height(),
            width: grid.width(),
            living: grid.living_cells(),
        }
    }

    /// Rebuild the grid this snapshot describes
    pub fn to_grid(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.height, self.width)?;
        grid.seed_from_coordinates(
            self.living
                .iter()
                .map(|&(row, col)| (row as isize, col as isize)),
        )?;
        Ok(grid)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Save a grid snapshot as pretty JSON
pub fn save_snapshot_to_file<P: AsRef<Path>>(snapshot: &GridSnapshot, path: P) -> Result<()> {
    let json = snapshot.to_json().context("Failed to serialize grid snapshot")?;
    write_creating_parent(path.as_ref(), json)
}

/// Load a grid from a JSON snapshot file
pub fn load_snapshot_from_file<P: AsRef<Path>>(path: P) -> Result<GridSnapshot> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.as_ref().display()))?;
    GridSnapshot::from_json(&content)
        .with_context(|| format!("Failed to parse snapshot file: {}", path.as_ref().display()))
}

fn write_creating_parent(path: &Path, content: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.display()))
}

/// Write every named pattern as a text grid sized to its bounding box plus a margin
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for pattern in patterns::ALL {
        let (height, width) = pattern.bounding_box();
        let mut grid = Grid::new(height + 2, width + 2)?;
        grid.seed_from_coordinates(pattern.coords())?;
        save_grid_to_file(&grid, dir.join(format!("{}.txt", pattern.name)))?;
    }

    Ok(())
}
