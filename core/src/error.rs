use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board size must be at least one tile")]
    InvalidSize,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Mine position listed more than once")]
    DuplicateMine,
    #[error("Mine layout does not match the configured mine count")]
    MineCountMismatch,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Tile status does not match the mine layout")]
    InvalidTileState,
    #[error("Game state does not match its board")]
    InconsistentState,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
