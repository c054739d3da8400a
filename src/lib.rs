#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use placement::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod grid;
mod placement;
mod snapshot;
mod types;

/// Validated parameters for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    rows: Coord,
    columns: Coord,
    holes: CellCount,
}

impl GameConfig {
    /// Checks dimensions against `[3, 100]` and the hole count against
    /// `[1, rows * columns - 1]` before anything is allocated.
    pub fn new(rows: Coord, columns: Coord, holes: CellCount) -> Result<Self> {
        let valid_dim = |dim: Coord| (MIN_DIMENSION..=MAX_DIMENSION).contains(&dim);
        if !valid_dim(rows) || !valid_dim(columns) {
            return Err(GameError::InvalidDimensions);
        }
        if holes < 1 || holes > mult(rows, columns) - 1 {
            return Err(GameError::InvalidHoleCount);
        }
        Ok(Self {
            rows,
            columns,
            holes,
        })
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn holes(&self) -> CellCount {
        self.holes
    }

    pub const fn size(&self) -> CellCount {
        mult(self.rows, self.columns)
    }
}

/// The external surface of the engine: one running game, two operations.
///
/// A host (CLI, service session) constructs a `Game` and then calls
/// [`Game::reveal`] until the snapshot's status leaves `InProgress`. A new
/// game means a new `Game` value; nothing is reset in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    engine: GameEngine,
}

impl Game {
    /// Builds the grid, scatters holes with the given seed, and starts the
    /// game `InProgress`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut grid = Grid::new(config.rows(), config.columns())?;
        RandomHolePlacer::new(seed).place(&mut grid, config.holes())?;
        Ok(Self {
            engine: GameEngine::new(grid),
        })
    }

    /// Reveals a cell and returns the resulting board snapshot.
    pub fn reveal(&mut self, row: Coord, column: Coord) -> Result<GameSnapshot> {
        self.engine.reveal((row, column))?;
        Ok(self.snapshot())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.engine)
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}
