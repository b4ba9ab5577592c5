//! HTTP API for the edit pipeline.
//!
//! Submit endpoints hand the request to the engine and return the job id
//! with 202 immediately; the job status endpoint is the only way to observe
//! progress. Media endpoints expose the media store for listing, metadata
//! updates and deletion.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
