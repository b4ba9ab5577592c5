//! Job store progress sink.

use async_trait::async_trait;
use tracing::warn;

use reel_media::ProgressObserver;
use reel_models::{JobId, JobStatus, JobUpdate};
use reel_store::JobStore;

/// Writes runner progress into the job document.
///
/// Events are dropped once the job has left the processing state, so a late
/// stderr line from a killed process can never touch a terminal job.
pub struct JobProgressWriter {
    job_store: JobStore,
    job_id: JobId,
}

impl JobProgressWriter {
    pub fn new(job_store: JobStore, job_id: JobId) -> Self {
        Self { job_store, job_id }
    }
}

#[async_trait]
impl ProgressObserver for JobProgressWriter {
    async fn on_progress(&self, percent: u8) {
        match self.job_store.get(&self.job_id).await {
            Ok(Some(job)) if job.status == JobStatus::Processing => {
                if let Err(e) = self
                    .job_store
                    .update(&self.job_id, JobUpdate::progress(percent))
                    .await
                {
                    warn!(job_id = %self.job_id, error = %e, "failed to record progress");
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!(job_id = %self.job_id, error = %e, "failed to read job for progress");
            }
        }
    }
}
