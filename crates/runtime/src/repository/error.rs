//! Error types raised by save-file handling.

use thiserror::Error;

/// Errors surfaced while reading or writing save files.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SaveError>;
