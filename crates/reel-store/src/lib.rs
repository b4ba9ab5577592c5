//! Filesystem-backed stores for jobs and media records.
//!
//! This crate provides:
//! - [`StorageLayout`]: the on-disk directory tree and idempotent setup
//! - [`JobStore`]: one JSON document per job, atomic whole-document writes
//! - [`MediaStore`]: media metadata documents plus the files they describe
//!
//! Both stores are deliberately storage-agnostic at the interface level so a
//! key-value backend can replace them without touching callers.

pub mod error;
pub mod job_store;
pub mod layout;
pub mod media_store;

pub use error::{StoreError, StoreResult};
pub use job_store::JobStore;
pub use layout::StorageLayout;
pub use media_store::{MediaFilter, MediaStore, SaveFileOptions};
