//! Named starting patterns
//!
//! Each pattern is a list of `(row, col)` cells measured from the grid's
//! top-left corner, with a little margin already built in.

/// A named table of cells to seed a grid with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    cells: &'static [(isize, isize)],
}

impl Pattern {
    /// Cells as seed coordinates
    pub fn coords(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        self.cells.iter().copied()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Smallest `(height, width)` grid that contains every cell
    pub fn bounding_box(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(row, col)| {
                (h.max(row as usize + 1), w.max(col as usize + 1))
            })
    }

    pub fn fits(&self, height: usize, width: usize) -> bool {
        let (h, w) = self.bounding_box();
        h <= height && w <= width
    }
}

/// Look a pattern up by name, ignoring case and `-`/`_` differences
pub fn find(name: &str) -> Option<&'static Pattern> {
    let wanted = normalize(name);
    ALL.iter().find(|p| normalize(p.name) == wanted)
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

pub const BLOCK: Pattern = Pattern {
    name: "block",
    description: "2x2 still life",
    cells: &[(1, 1), (1, 2), (2, 1), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    description: "period 2 oscillator",
    cells: &[(2, 1), (2, 2), (2, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    description: "moves one cell diagonally every 4 generations",
    cells: &[(2, 3), (3, 4), (4, 2), (4, 3), (4, 4)],
};

#[rustfmt::skip]
pub const HWSS: Pattern = Pattern {
    name: "hwss",
    description: "heavyweight spaceship",
    cells: &[
        (4, 4), (4, 5), (4, 6), (4, 7), (4, 8), (4, 9),
        (5, 3), (5, 9),
        (6, 9),
        (7, 3), (7, 8),
        (8, 5), (8, 6),
    ],
};

#[rustfmt::skip]
pub const PULSAR: Pattern = Pattern {
    name: "pulsar",
    description: "period 3 oscillator",
    cells: &[
        (3, 5), (3, 6), (3, 7), (3, 11), (3, 12), (3, 13),
        (5, 3), (5, 8), (5, 10), (5, 15),
        (6, 3), (6, 8), (6, 10), (6, 15),
        (7, 3), (7, 8), (7, 10), (7, 15),
        (8, 5), (8, 6), (8, 7), (8, 11), (8, 12), (8, 13),
        (10, 5), (10, 6), (10, 7), (10, 11), (10, 12), (10, 13),
        (11, 3), (11, 8), (11, 10), (11, 15),
        (12, 3), (12, 8), (12, 10), (12, 15),
        (13, 3), (13, 8), (13, 10), (13, 15),
        (15, 5), (15, 6), (15, 7), (15, 11), (15, 12), (15, 13),
    ],
};

#[rustfmt::skip]
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "gosper_glider_gun",
    description: "emits a glider every 30 generations",
    cells: &[
        (2, 26),
        (3, 24), (3, 26),
        (4, 14), (4, 15), (4, 22), (4, 23), (4, 36), (4, 37),
        (5, 13), (5, 17), (5, 22), (5, 23), (5, 36), (5, 37),
        (6, 2), (6, 3), (6, 12), (6, 18), (6, 22), (6, 23),
        (7, 2), (7, 3), (7, 12), (7, 16), (7, 18), (7, 19), (7, 24), (7, 26),
        (8, 12), (8, 18), (8, 26),
        (9, 13), (9, 17),
        (10, 14), (10, 15),
    ],
};

#[rustfmt::skip]
pub const SIMKIN_GLIDER_GUN: Pattern = Pattern {
    name: "simkin_glider_gun",
    description: "emits a glider every 120 generations",
    cells: &[
        (2, 2), (2, 3), (2, 9), (2, 10),
        (3, 2), (3, 3), (3, 9), (3, 10),
        (5, 6), (5, 7),
        (6, 6), (6, 7),
        (11, 24), (11, 25), (11, 27), (11, 28),
        (12, 23), (12, 29),
        (13, 23), (13, 30), (13, 33), (13, 34),
        (14, 23), (14, 24), (14, 25), (14, 29), (14, 33), (14, 34),
        (15, 28),
        (19, 22), (19, 23),
        (20, 22),
        (21, 23), (21, 24), (21, 25),
        (22, 25),
    ],
};

pub const ALL: &[Pattern] = &[
    BLOCK,
    BLINKER,
    GLIDER,
    HWSS,
    PULSAR,
    GOSPER_GLIDER_GUN,
    SIMKIN_GLIDER_GUN,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{GameOfLifeRules, Grid};
    use std::collections::HashSet;

    fn seeded(pattern: &Pattern, height: usize, width: usize) -> Grid {
        let mut grid = Grid::new(height, width).unwrap();
        grid.seed_from_coordinates(pattern.coords()).unwrap();
        grid
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find("glider"), Some(&GLIDER));
        assert_eq!(find("Gosper-Glider-Gun"), Some(&GOSPER_GLIDER_GUN));
        assert_eq!(find("lwss"), None);
    }

    #[test]
    fn test_cells_are_unique() {
        for pattern in ALL {
            let unique: HashSet<_> = pattern.coords().collect();
            assert_eq!(unique.len(), pattern.cell_count(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(BLOCK.bounding_box(), (3, 3));
        assert_eq!(GOSPER_GLIDER_GUN.bounding_box(), (11, 38));
        assert!(GOSPER_GLIDER_GUN.fits(60, 60));
        assert!(!GOSPER_GLIDER_GUN.fits(60, 37));
    }

    #[test]
    fn test_pulsar_period_three() {
        let start = seeded(&PULSAR, 19, 19);
        let once = GameOfLifeRules::evolve(&start);
        assert_ne!(once, start);
        assert_eq!(GameOfLifeRules::evolve_generations(start.clone(), 3), start);
    }

    #[test]
    fn test_block_is_still() {
        let start = seeded(&BLOCK, 4, 4);
        assert_eq!(GameOfLifeRules::evolve(&start), start);
    }
}
