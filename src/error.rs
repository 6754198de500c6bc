use thiserror::Error;

/// Errors raised while building boards or reading a puzzle description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("board size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("invalid tile label '{0}'")]
    InvalidLabel(String),

    #[error("cells are not a permutation of 0..{0}")]
    NotAPermutation(usize),

    #[error("unknown algorithm selector '{0}'")]
    UnknownAlgorithm(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("move {0} is blocked by the board edge")]
    BlockedMove(char),
}

/// Errors raised by the search bookkeeping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Path reconstruction reached a board that was never recorded.
    /// Seeing this means the frontier/visited bookkeeping is broken.
    #[error("board {0} has no recorded parent")]
    Unrecorded(String),
}
