//! Opaque identifiers for jobs and media records.
//!
//! Ids combine a millisecond timestamp with a random suffix so that records
//! created concurrently never collide while still sorting roughly by
//! creation time on disk.

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generate the random portion of an id (first uuid group, 8 hex chars).
fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Unique identifier for an edit job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Generate a new job ID.
    pub fn new() -> Self {
        Self(format!("job-{}-{}", Utc::now().timestamp_millis(), random_suffix()))
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a media record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MediaId(pub String);

impl MediaId {
    /// Generate a new media ID prefixed by its source kind
    /// (e.g. `edited-1714080000000-a1b2c3d4`).
    pub fn new(source_prefix: &str) -> Self {
        Self(format!(
            "{}-{}-{}",
            source_prefix,
            Utc::now().timestamp_millis(),
            random_suffix()
        ))
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MediaId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MediaId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_job_ids_are_unique() {
        let ids: HashSet<String> = (0..100).map(|_| JobId::new().0).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_media_id_prefix() {
        let id = MediaId::new("edited");
        assert!(id.as_str().starts_with("edited-"));
    }
}
