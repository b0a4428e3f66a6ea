use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column, and at most 255 of each")]
    InvalidSize,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Light chance must be a number between 0 and 1")]
    InvalidProbability,
    #[error("Unknown cell {0:?}, expected '.' or 'O'")]
    InvalidCell(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
