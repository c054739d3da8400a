use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid dimensions must be between 3x3 and 100x100")]
    InvalidDimensions,
    #[error("Hole count must be between 1 and grid size minus one")]
    InvalidHoleCount,
    #[error("Position is outside the grid")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
