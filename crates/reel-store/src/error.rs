//! Error types for store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while persisting jobs or media records.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("media file does not exist: {0}")]
    DanglingPath(PathBuf),

    #[error("source file does not exist: {0}")]
    SourceMissing(PathBuf),
}
