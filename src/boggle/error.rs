/// Errors raised while building boards, dictionaries and solutions.
#[derive(Debug, thiserror::Error)]
pub enum BoggleError {
    #[error("'q' without a following 'u' at position {position}")]
    InvalidLetterSequence { position: usize },
    #[error("{actual} letters cannot be formatted into a {size}x{size} board")]
    SizeMismatch { size: usize, actual: usize },
    #[error("board size {size} is too small (minimum {min})", min = super::MIN_BOARD_SIZE)]
    InvalidBoardSize { size: usize },
    #[error("dictionary io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("dictionary serialization error: {0}")]
    Serialization(#[from] bincode::Error),
    #[error("solution rendering error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoggleError>;
