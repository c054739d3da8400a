use crate::*;

/// Strategy for scattering holes over a grid.
pub trait HolePlacer {
    /// Places exactly `count` additional distinct holes, or fails with
    /// `InvalidHoleCount` before any mutation when `count` is zero or would
    /// not leave at least one safe cell on the grid.
    fn place(self, grid: &mut Grid, count: CellCount) -> Result<()>;
}

/// Uniform placement by seeded rejection sampling: draw random positions and
/// retry on cells that already hold a hole.
///
/// Expected O(count) draws for sparse boards; at the legal maximum
/// (`count == size - 1`) at least one free cell always remains, so the loop
/// terminates for every valid count.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomHolePlacer {
    seed: u64,
}

impl RandomHolePlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl HolePlacer for RandomHolePlacer {
    fn place(self, grid: &mut Grid, count: CellCount) -> Result<()> {
        use rand::prelude::*;

        // Bound by the free cells actually left, not the grid size: the
        // grid may already hold holes, and the sampling loop only
        // terminates while an unplaced cell remains.
        if count < 1 || count >= grid.safe_cell_count() {
            return Err(GameError::InvalidHoleCount);
        }

        let (rows, columns) = (grid.rows(), grid.columns());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed = 0;
        while placed < count {
            let pos = (
                rng.random_range(0..rows),
                rng.random_range(0..columns),
            );
            if grid.place_hole(pos)? {
                placed += 1;
            }
        }

        log::debug!(
            "placed {} holes on {}x{} grid (seed {})",
            count,
            rows,
            columns,
            self.seed
        );
        Ok(())
    }
}
