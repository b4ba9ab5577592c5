//! Edit job state and lifecycle.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::JobId;

/// Job status.
///
/// Transitions are monotonic: `pending -> processing -> {completed | failed}`.
/// A job never re-enters `pending` and terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Job created, not yet picked up
    #[default]
    Pending,
    /// FFmpeg invocation in flight
    Processing,
    /// Output produced and registered
    Completed,
    /// Terminal failure; resubmit as a new request
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    /// Whether `next` is a legal forward transition from `self`.
    pub fn can_advance_to(&self, next: JobStatus) -> bool {
        match (self, next) {
            (a, b) if *a == b => true,
            (JobStatus::Pending, JobStatus::Processing) => true,
            (JobStatus::Pending, JobStatus::Failed) => true,
            (JobStatus::Processing, JobStatus::Completed) => true,
            (JobStatus::Processing, JobStatus::Failed) => true,
            _ => false,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One asynchronous edit request, persisted as a single JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    /// Unique job ID
    pub id: JobId,

    /// Current status
    #[serde(default)]
    pub status: JobStatus,

    /// Progress percentage (0-100; 100 only when completed)
    #[serde(default)]
    pub progress: u8,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp (refreshed on every change)
    pub updated_at: DateTime<Utc>,

    /// Output file path (set only on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,

    /// Error message (set only on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Human-readable record of the exact invocation, for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Job {
    /// Create a fresh pending job.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            status: JobStatus::Pending,
            progress: 0,
            created_at: now,
            updated_at: now,
            output_path: None,
            error_message: None,
            command: None,
        }
    }

    /// Apply a partial update, refreshing `updated_at`.
    ///
    /// Status changes that would move backwards are ignored, and progress is
    /// clamped below 100 unless the same update marks the job completed.
    pub fn apply(&mut self, update: JobUpdate) {
        if let Some(status) = update.status {
            if self.status.can_advance_to(status) {
                self.status = status;
            }
        }
        if let Some(progress) = update.progress {
            self.progress = if self.status == JobStatus::Completed {
                progress.min(100)
            } else {
                progress.min(99)
            };
        }
        if let Some(output_path) = update.output_path {
            self.output_path = Some(output_path);
        }
        if let Some(error_message) = update.error_message {
            self.error_message = Some(error_message);
        }
        if let Some(command) = update.command {
            self.command = Some(command);
        }
        self.updated_at = Utc::now();
    }
}

impl Default for Job {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial field set merged into a [`Job`] by the job store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl JobUpdate {
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn progress(progress: u8) -> Self {
        Self {
            progress: Some(progress),
            ..Default::default()
        }
    }

    pub fn command(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            ..Default::default()
        }
    }

    /// Update marking the job completed with its final output.
    pub fn completed(output_path: PathBuf) -> Self {
        Self {
            status: Some(JobStatus::Completed),
            progress: Some(100),
            output_path: Some(output_path),
            ..Default::default()
        }
    }

    /// Update marking the job failed with an error message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: Some(JobStatus::Failed),
            error_message: Some(error.into()),
            ..Default::default()
        }
    }
}
