//! Edit operation orchestrator.
//!
//! Turns validated edit requests (concatenate, trim, brand, transition,
//! export) into FFmpeg invocations, tracks each one as an asynchronous job,
//! and registers the produced file as an edited media record. FFmpeg
//! subprocess concurrency is bounded by a semaphore; in-flight jobs can be
//! cancelled and are killed after a wall-clock timeout.

pub mod config;
pub mod editor;
pub mod error;
pub mod progress;

pub use config::EngineConfig;
pub use editor::EditorService;
pub use error::{EngineError, EngineResult};
pub use progress::JobProgressWriter;
