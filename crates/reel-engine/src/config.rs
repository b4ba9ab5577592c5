//! Engine configuration.

use reel_media::filters::DEFAULT_FONT_PATH;
use std::env;

/// Tunables for the edit engine, read from the environment.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum concurrent FFmpeg subprocesses
    pub max_ffmpeg_processes: usize,
    /// Wall-clock limit per job; a hung FFmpeg is killed when it elapses
    pub job_timeout_secs: u64,
    /// Font used for lower-third overlays
    pub font_path: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_ffmpeg_processes: 4,
            job_timeout_secs: 3600,
            font_path: DEFAULT_FONT_PATH.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_ffmpeg_processes: env::var("MAX_FFMPEG_PROCESSES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.max_ffmpeg_processes),
            job_timeout_secs: env::var("JOB_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.job_timeout_secs),
            font_path: env::var("FONT_PATH").unwrap_or(defaults.font_path),
        }
    }
}
