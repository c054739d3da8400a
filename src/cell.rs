use serde::{Deserialize, Serialize};

/// State of a single grid cell: hole flag, revealed flag, and the number of
/// holes among its up-to-8 neighbors.
///
/// Both flags are monotonic for the lifetime of a game; a new game builds a
/// fresh grid rather than clearing cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_hole: bool,
    is_revealed: bool,
    adjacent_holes: u8,
}

impl Cell {
    pub const fn is_hole(self) -> bool {
        self.is_hole
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub const fn adjacent_holes(self) -> u8 {
        self.adjacent_holes
    }

    /// A cell is empty when no neighbor is a hole; empty cells are the ones
    /// the flood fill expands through.
    pub const fn is_empty(self) -> bool {
        self.adjacent_holes == 0
    }

    pub(crate) fn mark_hole(&mut self) {
        self.is_hole = true;
    }

    pub(crate) fn mark_revealed(&mut self) {
        self.is_revealed = true;
    }

    /// Bumps the adjacent-hole counter during placement.
    ///
    /// Panics if the counter would exceed 8: a cell has at most 8 neighbors,
    /// so a 9th increment means placement or grid construction is broken.
    pub(crate) fn add_adjacent_hole(&mut self) {
        assert!(
            self.adjacent_holes < 8,
            "cell can border at most 8 holes, counter overflow"
        );
        self.adjacent_holes += 1;
    }
}
