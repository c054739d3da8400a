use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Boards smaller than 3x3 are not meaningfully playable.
pub const MIN_DIMENSION: Coord = 3;
/// Sanity ceiling; no known game of this type goes larger.
pub const MAX_DIMENSION: Coord = 100;

/// Dense 2-D container of [`Cell`]s with fixed dimensions.
///
/// The grid exclusively owns its cells by value; all neighbor computation is
/// coordinate arithmetic, never stored references. Mutation outside the crate
/// goes through [`Grid::place_hole`] and the engine's reveal path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    hole_count: CellCount,
}

impl Grid {
    /// Creates a grid of default cells, or `InvalidDimensions` when either
    /// dimension falls outside `[3, 100]`.
    pub fn new(rows: Coord, columns: Coord) -> Result<Self> {
        let valid = (MIN_DIMENSION..=MAX_DIMENSION).contains(&rows)
            && (MIN_DIMENSION..=MAX_DIMENSION).contains(&columns);
        if !valid {
            return Err(GameError::InvalidDimensions);
        }

        Ok(Self {
            cells: Array2::default((rows, columns).to_nd_index()),
            hole_count: 0,
        })
    }

    /// Builds a grid with holes at exactly the given positions. Duplicate
    /// positions are placed once. Intended for deterministic boards in tests
    /// and scripted setups.
    pub fn with_holes(rows: Coord, columns: Coord, holes: &[Pos]) -> Result<Self> {
        let mut grid = Self::new(rows, columns)?;
        for &pos in holes {
            grid.place_hole(pos)?;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> Coord {
        self.dim().0
    }

    pub fn columns(&self) -> Coord {
        self.dim().1
    }

    pub fn size(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    /// Number of holes placed so far.
    pub fn hole_count(&self) -> CellCount {
        self.hole_count
    }

    /// At least one safe cell must always remain.
    pub fn max_hole_count(&self) -> CellCount {
        self.size() - 1
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.size() - self.hole_count
    }

    /// Bounds-checks a position against the grid dimensions.
    pub fn validate(&self, pos: Pos) -> Result<Pos> {
        let (rows, columns) = self.dim();
        if pos.0 < rows && pos.1 < columns {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Returns a copy of the cell at `pos`, or `OutOfBounds`.
    pub fn cell_at(&self, pos: Pos) -> Result<Cell> {
        let pos = self.validate(pos)?;
        Ok(self[pos])
    }

    /// In-bounds neighbors of `pos` in row-major order: corners yield 3,
    /// edges 5, interior cells 8.
    pub fn neighbors(&self, pos: Pos) -> NeighborIter {
        NeighborIter::new(pos, self.dim())
    }

    /// Marks `pos` as a hole and increments the adjacent-hole counter of
    /// every neighbor. Returns `false` without mutating when the cell is
    /// already a hole.
    pub fn place_hole(&mut self, pos: Pos) -> Result<bool> {
        let pos = self.validate(pos)?;
        if self[pos].is_hole() {
            return Ok(false);
        }

        self[pos].mark_hole();
        for neighbor in self.neighbors(pos) {
            self[neighbor].add_adjacent_hole();
        }
        self.hole_count += 1;
        Ok(true)
    }

    fn dim(&self) -> Pos {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        &mut self.cells[pos.to_nd_index()]
    }
}
