use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board width and height must be at least 1")]
    EmptyBoard,
    #[error("Too many mines, requested {mines} but board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Preset layout has {actual} mines, expected {expected}")]
    MineCountMismatch {
        expected: CellCount,
        actual: CellCount,
    },
    #[error("Preset layout places a mine outside the board at {0:?}")]
    MineOutOfBounds(Coord2),
    #[error("Preset layout places a mine on the first revealed cell {0:?}")]
    MineOnProtectedCell(Coord2),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Coordinates {0:?} are out of bounds")]
    OutOfBounds(Coord2),
}

pub type Result<T> = core::result::Result<T, GameError>;
