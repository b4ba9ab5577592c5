//! FFmpeg CLI wrapper for the edit pipeline.
//!
//! This crate provides:
//! - [`FfmpegCommand`]: argument list builder for edit invocations
//! - [`FfmpegRunner`]: subprocess execution with progress streaming,
//!   cancellation and a wall-clock timeout
//! - [`ProgressObserver`]: narrow seam between the runner's stderr parsing
//!   and whoever records progress
//! - Filter-graph builders for transitions, lower thirds and export scaling
//! - ffprobe duration probing

pub mod command;
pub mod error;
pub mod filters;
pub mod probe;
pub mod progress;

pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
pub use filters::{lower_third_filter, scale_filter, transition_filter};
pub use probe::probe_duration;
pub use progress::{parse_time_marker, progress_percent, NoopProgress, ProgressObserver};
