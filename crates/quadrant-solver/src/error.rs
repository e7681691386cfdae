//! Error taxonomy for malformed input.
//!
//! An unreachable goal is not an error: the solver reports it as `None`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("grid must be 3 rows of 3 symbols, got {0}")]
    InvalidShape(String),

    #[error("expected 9 symbols, found {0}")]
    SymbolCount(usize),

    #[error("invalid symbol {0:?}")]
    InvalidSymbol(String),

    #[error("symbol {0} appears more than once")]
    DuplicateSymbol(String),

    #[error("operator must be in 0..=3, got {0}")]
    InvalidOperator(u8),

    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("parent map has no complete chain from goal back to start")]
    BrokenParentChain,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
