//! Media record models.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::MediaId;

/// Where a media artifact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum MediaSource {
    /// Uploaded directly by the user
    #[default]
    Upload,
    /// Produced by a third-party generation API
    Generated,
    /// Produced by an edit operation
    Edited,
}

impl MediaSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaSource::Upload => "upload",
            MediaSource::Generated => "generated",
            MediaSource::Edited => "edited",
        }
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One addressable video artifact, persisted as a single JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MediaRecord {
    /// Unique media ID
    pub id: MediaId,

    /// File name within the storage tree
    pub filename: String,

    /// Storage location on disk
    pub path: PathBuf,

    /// Externally resolvable location
    pub url: String,

    /// File size in bytes
    pub size: u64,

    /// Origin of the artifact
    pub source: MediaSource,

    /// Duration in seconds, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Descriptive category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Descriptive tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl MediaRecord {
    /// Create a new record for a file already present at `path`.
    pub fn new(
        source: MediaSource,
        filename: impl Into<String>,
        path: PathBuf,
        url: impl Into<String>,
        size: u64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: MediaId::new(source.as_str()),
            filename: filename.into(),
            path,
            url: url.into(),
            size,
            source,
            duration: None,
            category: None,
            tags: Vec::new(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_duration(mut self, duration: Option<f64>) -> Self {
        self.duration = duration;
        self
    }

    /// Apply a partial metadata update, refreshing `updated_at`.
    pub fn apply(&mut self, update: MediaUpdate) {
        if let Some(filename) = update.filename {
            self.filename = filename;
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(duration) = update.duration {
            self.duration = Some(duration);
        }
        self.updated_at = Utc::now();
    }
}

/// Partial metadata update for a media record.
///
/// Identity fields (`id`, `path`, `url`, `size`, `source`) are owned by the
/// store and cannot be changed through a metadata update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MediaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}
