//! Toroidal grid representation for Game of Life

use crate::error::{GridError, GridResult};
use itertools::iproduct;

/// A fixed-size grid whose edges wrap around to each other.
///
/// Cells are stored row-major in a flat vector, so every row has exactly
/// `width` cells by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid with `height` rows and `width` columns
    pub fn new(height: usize, width: usize) -> GridResult<Self> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { height, width });
        }

        Ok(Self {
            height,
            width,
            cells: vec![false; height * width],
        })
    }

    /// Create a grid from explicit rows of cell states
    pub fn from_rows(rows: Vec<Vec<bool>>) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { height, width });
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid of the same dimensions from a flat row-major cell vector
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.height * self.width);
        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Mark every listed `(row, col)` alive.
    ///
    /// All coordinates are checked before any cell is touched, so a rejected
    /// seed leaves the grid unchanged.
    pub fn seed_from_coordinates<I>(&mut self, coords: I) -> GridResult<()>
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        let indices = coords
            .into_iter()
            .map(|(row, col)| self.checked_index(row, col))
            .collect::<GridResult<Vec<_>>>()?;

        for idx in indices {
            self.cells[idx] = true;
        }
        Ok(())
    }

    fn checked_index(&self, row: isize, col: isize) -> GridResult<usize> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < self.height && c < self.width => Ok(self.index(r, c)),
            _ => Err(GridError::CoordinateOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            }),
        }
    }

    /// Read an in-range cell. Panics if the coordinate is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) outside {}x{} grid",
            self.height,
            self.width
        );
        self.cells[self.index(row, col)]
    }

    /// State of the cell at `(row, col)`.
    ///
    /// A coordinate exactly one step off an edge wraps to the opposite edge:
    /// `-1` reads the last row/column and `height`/`width` reads the first.
    /// Anything further out is not wrapped and panics on the index check.
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        let row = wrap_once(row, self.height);
        let col = wrap_once(col, self.width);
        self.get(row, col)
    }

    /// Count live cells among the 8 surrounding cells, wrapping at the edges
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as isize, col as isize);
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter(|&(dr, dc)| self.is_alive(row + dr, col + dc))
            .count() as u8
    }

    /// Coordinates of all living cells, row-major
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| (idx / self.width, idx % self.width))
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }
}

fn wrap_once(pos: isize, len: usize) -> usize {
    if pos == -1 {
        len - 1
    } else if pos == len as isize {
        0
    } else {
        // Negative values further out become huge and fail the bounds check.
        pos as usize
    }
}
