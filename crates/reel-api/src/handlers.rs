//! API handlers.

pub mod edit;
pub mod health;
pub mod jobs;
pub mod media;

pub use health::health;
