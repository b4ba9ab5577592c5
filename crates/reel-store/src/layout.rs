//! On-disk directory layout.
//!
//! ```text
//! <data_dir>/
//!   uploads/temp/<job_id>/     per-job scratch space
//!   videos/upload/             uploaded sources
//!   videos/generated/          API-generated videos
//!   videos/edited/             edit operation outputs
//!   videos/metadata/<id>.json  media record documents
//!   videos/jobs/<id>.json      job documents
//! ```

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use reel_models::{JobId, MediaSource};

use crate::error::StoreResult;

/// Describes the storage tree and creates it idempotently.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    data_dir: PathBuf,
}

impl StorageLayout {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create layout from the `DATA_DIR` environment variable.
    pub fn from_env() -> Self {
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        Self::new(data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Working area for in-flight operations.
    pub fn uploads_temp_dir(&self) -> PathBuf {
        self.data_dir.join("uploads").join("temp")
    }

    /// Scratch directory scoped to one job, avoiding cross-job collisions.
    pub fn job_temp_dir(&self, job_id: &JobId) -> PathBuf {
        self.uploads_temp_dir().join(job_id.as_str())
    }

    pub fn videos_dir(&self) -> PathBuf {
        self.data_dir.join("videos")
    }

    /// Per-source media directory (`videos/upload`, `videos/edited`, ...).
    pub fn media_dir(&self, source: MediaSource) -> PathBuf {
        self.videos_dir().join(source.as_str())
    }

    /// Output area for edit operation results.
    pub fn edited_dir(&self) -> PathBuf {
        self.media_dir(MediaSource::Edited)
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.videos_dir().join("metadata")
    }

    pub fn jobs_dir(&self) -> PathBuf {
        self.videos_dir().join("jobs")
    }

    /// Externally resolvable URL for a stored media file.
    pub fn url_for(&self, source: MediaSource, filename: &str) -> String {
        format!("/uploads/videos/{}/{}", source.as_str(), filename)
    }

    /// Create every directory in the layout; safe to call repeatedly.
    pub async fn ensure_dirs(&self) -> StoreResult<()> {
        fs::create_dir_all(self.uploads_temp_dir()).await?;
        for source in [MediaSource::Upload, MediaSource::Generated, MediaSource::Edited] {
            fs::create_dir_all(self.media_dir(source)).await?;
        }
        fs::create_dir_all(self.metadata_dir()).await?;
        fs::create_dir_all(self.jobs_dir()).await?;
        info!("storage layout initialized at {}", self.data_dir.display());
        Ok(())
    }
}
