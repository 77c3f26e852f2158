use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("square (row {row}, col {col}) is off the board")]
    OutOfRange { row: i32, col: i32 },
    #[error("invalid notation: {0}")]
    InvalidNotation(String),
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

pub type Result<T> = std::result::Result<T, ChessError>;
