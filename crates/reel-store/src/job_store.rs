//! Job document store.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use reel_models::{Job, JobId, JobUpdate};

use crate::error::StoreResult;
use crate::layout::StorageLayout;

/// Persists one JSON document per job under the jobs directory.
///
/// Every write replaces the whole document atomically (temp file + rename),
/// so a concurrent poller never observes a partially written record. Updates
/// are serialized through an internal lock; with multiple concurrent updates
/// to the same job the last writer wins per field, which is acceptable at
/// the coarse polling cadence.
#[derive(Clone)]
pub struct JobStore {
    layout: StorageLayout,
    write_lock: Arc<Mutex<()>>,
}

impl JobStore {
    pub fn new(layout: StorageLayout) -> Self {
        Self {
            layout,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn job_path(&self, id: &JobId) -> PathBuf {
        self.layout.jobs_dir().join(format!("{}.json", id))
    }

    /// Create a fresh pending job and persist it.
    pub async fn create(&self) -> StoreResult<Job> {
        let job = Job::new();
        let _guard = self.write_lock.lock().await;
        self.write_document(&job).await?;
        debug!(job_id = %job.id, "created job");
        Ok(job)
    }

    /// Fetch a job by id. Absence is a valid outcome, not an error.
    pub async fn get(&self, id: &JobId) -> StoreResult<Option<Job>> {
        let path = self.job_path(id);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Merge a partial update into an existing job, refreshing `updated_at`.
    ///
    /// Returns `None` if the job does not exist.
    pub async fn update(&self, id: &JobId, update: JobUpdate) -> StoreResult<Option<Job>> {
        let _guard = self.write_lock.lock().await;
        let Some(mut job) = self.get(id).await? else {
            return Ok(None);
        };
        job.apply(update);
        self.write_document(&job).await?;
        Ok(Some(job))
    }

    /// Atomically replace the job document on disk.
    async fn write_document(&self, job: &Job) -> StoreResult<()> {
        fs::create_dir_all(self.layout.jobs_dir()).await?;
        let path = self.job_path(&job.id);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(job)?;
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}
