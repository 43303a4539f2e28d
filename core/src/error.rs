use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be positive")]
    InvalidDimension,
    #[error("Too many mines for the board")]
    TooManyMines,
    #[error("Mine count does not fit the board")]
    InvalidMineCount,
    #[error("Position out of bounds")]
    OutOfBounds,
    #[error("Cell is already open")]
    AlreadyOpen,
    #[error("Cell is flagged, unflag it first")]
    Flagged,
    #[error("Cannot flag an open cell")]
    CannotFlagOpenCell,
    #[error("Mines were already placed on this board")]
    MinesAlreadyPlaced,
    #[error("Mine positions are out of bounds or repeated")]
    InvalidMineLayout,
}

pub type Result<T> = core::result::Result<T, GameError>;
