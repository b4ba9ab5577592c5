//! Error types for the edit engine.

use reel_models::{MediaId, RequestError};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while orchestrating an edit operation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid request: {0}")]
    Invalid(#[from] RequestError),

    #[error("media not found: {0}")]
    MissingMedia(MediaId),

    #[error(transparent)]
    Store(#[from] reel_store::StoreError),

    #[error(transparent)]
    Media(#[from] reel_media::MediaError),
}
