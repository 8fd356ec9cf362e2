use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Tile index out of range")]
    InvalidTileIndex,
    #[error("Tile index listed more than once")]
    DuplicateTileIndex,
    #[error("Tile cannot hold both a treasure and a trap")]
    OverlappingContent,
    #[error("Too many treasures and traps for the board")]
    TooManySpecialTiles,
    #[error("Label range is too small for the number of tiles")]
    LabelRangeTooSmall,
    #[error("Label range minimum is above its maximum")]
    InvalidLabelRange,
    #[error("Board must have at least one tile")]
    NoTiles,
    #[error("At least one player is required")]
    NoPlayers,
    #[error("Too many players")]
    TooManyPlayers,
}

pub type Result<T> = core::result::Result<T, GameError>;
