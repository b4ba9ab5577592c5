//! Error types for media operations.

use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while running the external tooling.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("FFmpeg not found in PATH")]
    FfmpegNotFound,

    #[error("FFprobe not found in PATH")]
    FfprobeNotFound,

    /// The process could not be launched at all; distinct from a non-zero exit.
    #[error("failed to start process: {0}")]
    SpawnFailed(std::io::Error),

    #[error("FFmpeg exited with code {exit_code:?}: {stderr}")]
    FfmpegFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("FFprobe failed: {0}")]
    FfprobeFailed(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("operation timed out after {0} seconds")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl MediaError {
    /// Create an FFmpeg failure error from an exit status and stderr tail.
    pub fn ffmpeg_failed(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::FfmpegFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }
}
