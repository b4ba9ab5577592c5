//! Edit request payloads.
//!
//! These are transient inputs to the edit engine; they are never persisted.
//! Each request type carries a `validate()` method that rejects malformed
//! parameters before any job reaches the processing state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::MediaId;

/// Request validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("at least {required} source videos are required (got {got})")]
    TooFewSources { required: usize, got: usize },

    #[error("invalid time range: start ({start}s) must be non-negative and before end ({end}s)")]
    InvalidTimeRange { start: f64, end: f64 },

    #[error("duration must be positive (got {0}s)")]
    NonPositiveDuration(f64),

    #[error("start time must be non-negative (got {0}s)")]
    NegativeStartTime(f64),

    #[error("lower third text cannot be empty")]
    EmptyText,

    #[error("invalid resolution: {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("invalid frame rate: {0}")]
    InvalidFrameRate(f64),
}

/// Descriptor for the produced output file and its metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct OutputDescriptor {
    /// Output file name; a timestamped default is generated when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Supported transition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Fade,
    Dissolve,
    Wipe,
    Zoom,
}

impl TransitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionKind::Fade => "fade",
            TransitionKind::Dissolve => "dissolve",
            TransitionKind::Wipe => "wipe",
            TransitionKind::Zoom => "zoom",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transition annotation between adjacent clips in a concat request.
///
/// Concatenation itself is a straight join; these specs are carried through
/// as metadata. Cross-fading is done by the separate transition operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TransitionSpec {
    #[serde(rename = "type")]
    pub kind: TransitionKind,
    /// Duration in seconds
    pub duration: f64,
}

/// Concatenate two or more videos in order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ConcatRequest {
    /// Ordered media ids (at least two)
    pub videos: Vec<MediaId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<TransitionSpec>,
    #[serde(default)]
    pub output: OutputDescriptor,
}

impl ConcatRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.videos.len() < 2 {
            return Err(RequestError::TooFewSources {
                required: 2,
                got: self.videos.len(),
            });
        }
        for spec in &self.transitions {
            if spec.duration <= 0.0 {
                return Err(RequestError::NonPositiveDuration(spec.duration));
            }
        }
        Ok(())
    }
}

/// Trim a single video to `[start_time, end_time]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TrimRequest {
    pub video_id: MediaId,
    /// Start time in seconds
    pub start_time: f64,
    /// End time in seconds (must be after start)
    pub end_time: f64,
    #[serde(default)]
    pub output: OutputDescriptor,
}

impl TrimRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.start_time < 0.0 || self.end_time <= self.start_time {
            return Err(RequestError::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }
}

/// Vertical placement for a lower-third overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LowerThirdPosition {
    Top,
    Bottom,
}

/// Timed text overlay shown during `[start_time, start_time + duration]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LowerThird {
    pub text: String,
    pub position: LowerThirdPosition,
    /// How long the text stays visible, in seconds
    pub duration: f64,
    /// When the text appears, in seconds
    pub start_time: f64,
}

/// Add branding to a video.
///
/// Exactly one branding mode is honored per request: intro+outro
/// concatenation takes precedence over the lower third; with neither the
/// source is passed through unmodified (still producing a new record).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BrandRequest {
    pub video_id: MediaId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<MediaId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outro: Option<MediaId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_third: Option<LowerThird>,
    #[serde(default)]
    pub output: OutputDescriptor,
}

impl BrandRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        if let Some(lt) = &self.lower_third {
            if lt.text.trim().is_empty() {
                return Err(RequestError::EmptyText);
            }
            if lt.duration <= 0.0 {
                return Err(RequestError::NonPositiveDuration(lt.duration));
            }
            if lt.start_time < 0.0 {
                return Err(RequestError::NegativeStartTime(lt.start_time));
            }
        }
        Ok(())
    }

    /// Whether the intro+outro concat mode applies.
    pub fn has_intro_outro(&self) -> bool {
        self.intro.is_some() && self.outro.is_some()
    }
}

/// Blend the tail of one video into the head of another.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TransitionRequest {
    pub video1: MediaId,
    pub video2: MediaId,
    #[serde(rename = "type")]
    pub kind: TransitionKind,
    /// Transition duration in seconds
    pub duration: f64,
    #[serde(default)]
    pub output: OutputDescriptor,
}

impl TransitionRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.duration <= 0.0 {
            return Err(RequestError::NonPositiveDuration(self.duration));
        }
        Ok(())
    }
}

/// Target container format for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Mp4,
    Webm,
    Mov,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Mp4 => "mp4",
            ExportFormat::Webm => "webm",
            ExportFormat::Mov => "mov",
        }
    }

    /// File extension for the container.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Video codec used for this container.
    pub fn video_codec(&self) -> &'static str {
        match self {
            ExportFormat::Webm => "libvpx-vp9",
            ExportFormat::Mp4 | ExportFormat::Mov => "libx264",
        }
    }

    /// Audio codec used for this container.
    pub fn audio_codec(&self) -> &'static str {
        match self {
            ExportFormat::Webm => "libopus",
            ExportFormat::Mp4 | ExportFormat::Mov => "aac",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compression quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

impl QualityTier {
    /// CRF value for the given container; VP9 uses a different numeric scale
    /// than x264, lower is always higher quality.
    pub fn crf(&self, format: ExportFormat) -> u8 {
        match (self, format) {
            (QualityTier::Low, ExportFormat::Webm) => 35,
            (QualityTier::Low, _) => 28,
            (QualityTier::Medium, ExportFormat::Webm) => 30,
            (QualityTier::Medium, _) => 23,
            (QualityTier::High, ExportFormat::Webm) => 24,
            (QualityTier::High, _) => 18,
        }
    }

    /// Audio bitrate for the tier.
    pub fn audio_bitrate(&self) -> &'static str {
        match self {
            QualityTier::Low => "96k",
            QualityTier::Medium => "128k",
            QualityTier::High => "192k",
        }
    }
}

/// Explicit output resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// Export a video to a target container/resolution/quality/frame rate.
///
/// All knobs are optional and independently composable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportRequest {
    pub video_id: MediaId,
    pub format: ExportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    #[serde(default)]
    pub output: OutputDescriptor,
}

impl ExportRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        if let Some(res) = self.resolution {
            if res.width == 0 || res.height == 0 {
                return Err(RequestError::InvalidResolution {
                    width: res.width,
                    height: res.height,
                });
            }
        }
        if let Some(fps) = self.fps {
            if fps <= 0.0 {
                return Err(RequestError::InvalidFrameRate(fps));
            }
        }
        Ok(())
    }
}
