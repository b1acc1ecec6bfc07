// error.rs - Error types for the Game of Life engine

use std::path::PathBuf;
use thiserror::Error;

/// Engine result type
pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors raised by the grid, history and simulation facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("history index {index} out of range (history holds {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised by the JSON pattern store.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed pattern file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid pattern file name: {0:?}")]
    InvalidName(PathBuf),
}
