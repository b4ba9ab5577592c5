//! Media inspection via ffprobe.

use serde::Deserialize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::error::{MediaError, MediaResult};

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    format: ProbeFormat,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
}

/// Probe the duration of a media file in seconds.
pub async fn probe_duration(path: impl AsRef<Path>) -> MediaResult<f64> {
    which::which("ffprobe").map_err(|_| MediaError::FfprobeNotFound)?;

    let path = path.as_ref();
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "json",
        ])
        .arg(path)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(MediaError::SpawnFailed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(MediaError::FfprobeFailed(stderr));
    }

    let duration = parse_probe_duration(&output.stdout)?;
    debug!("probed {} duration: {:.2}s", path.display(), duration);
    Ok(duration)
}

fn parse_probe_duration(stdout: &[u8]) -> MediaResult<f64> {
    let parsed: ProbeOutput = serde_json::from_slice(stdout)?;
    parsed
        .format
        .duration
        .as_deref()
        .and_then(|d| d.parse::<f64>().ok())
        .ok_or_else(|| MediaError::FfprobeFailed("no duration in probe output".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probe_duration() {
        let json = br#"{"format":{"filename":"a.mp4","duration":"42.517000"}}"#;
        let duration = parse_probe_duration(json).unwrap();
        assert!((duration - 42.517).abs() < 0.001);
    }

    #[test]
    fn test_parse_probe_duration_missing() {
        let json = br#"{"format":{"filename":"a.mp4"}}"#;
        assert!(matches!(
            parse_probe_duration(json),
            Err(MediaError::FfprobeFailed(_))
        ));
    }

    #[test]
    fn test_parse_probe_duration_malformed() {
        assert!(matches!(
            parse_probe_duration(b"not json"),
            Err(MediaError::JsonParse(_))
        ));
    }
}
