//! Shared data models for the reelstudio backend.
//!
//! This crate provides Serde-serializable types for:
//! - Edit jobs and their lifecycle
//! - Media records (uploaded, generated and edited artifacts)
//! - Edit request payloads (concatenate, trim, brand, transition, export)

pub mod id;
pub mod job;
pub mod media;
pub mod request;

// Re-export common types
pub use id::{JobId, MediaId};
pub use job::{Job, JobStatus, JobUpdate};
pub use media::{MediaRecord, MediaSource, MediaUpdate};
pub use request::{
    BrandRequest, ConcatRequest, ExportFormat, ExportRequest, LowerThird, LowerThirdPosition,
    OutputDescriptor, QualityTier, RequestError, Resolution, TransitionKind, TransitionRequest,
    TransitionSpec, TrimRequest,
};
