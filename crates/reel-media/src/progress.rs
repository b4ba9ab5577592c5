//! Progress extraction from FFmpeg diagnostic output.
//!
//! FFmpeg prints stats lines like
//! `frame=  240 fps= 60 q=28.0 size=    1024kB time=00:00:08.12 bitrate=...`
//! on stderr. The runner scans each line for the `time=` marker and converts
//! it into a percentage of the target duration. The parsing strategy is kept
//! behind [`ProgressObserver`] so orchestration code never touches the log
//! format.

use async_trait::async_trait;

/// Target duration assumed when the source could not be probed.
pub const DEFAULT_TARGET_DURATION_SECS: f64 = 60.0;

/// Receives progress percentages as the runner parses them.
///
/// Implementations decide where progress goes (job store, logs, tests).
#[async_trait]
pub trait ProgressObserver: Send + Sync {
    async fn on_progress(&self, percent: u8);
}

/// Observer that discards progress events.
pub struct NoopProgress;

#[async_trait]
impl ProgressObserver for NoopProgress {
    async fn on_progress(&self, _percent: u8) {}
}

/// Extract the elapsed seconds from a `time=HH:MM:SS.ff` marker, if present.
pub fn parse_time_marker(line: &str) -> Option<f64> {
    let idx = line.find("time=")?;
    let rest = &line[idx + 5..];
    let token = rest.split_whitespace().next()?;
    if token == "N/A" {
        return None;
    }

    let mut parts = token.split(':');
    let hours: f64 = parts.next()?.parse().ok()?;
    let minutes: f64 = parts.next()?.parse().ok()?;
    let seconds: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || hours < 0.0 || minutes < 0.0 || seconds < 0.0 {
        return None;
    }
    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Convert elapsed seconds into a percentage of the target duration.
///
/// Clamped to 99 during streaming; 100 is written only by the orchestrator
/// once the tool has exited successfully.
pub fn progress_percent(elapsed_secs: f64, target_duration_secs: f64) -> u8 {
    let target = if target_duration_secs > 0.0 {
        target_duration_secs
    } else {
        DEFAULT_TARGET_DURATION_SECS
    };
    let percent = (elapsed_secs / target * 100.0).round();
    percent.clamp(0.0, 99.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_marker() {
        let line = "frame=  240 fps= 60 q=28.0 size=    1024kB time=00:00:08.12 bitrate= 1033.0kbits/s";
        let secs = parse_time_marker(line).unwrap();
        assert!((secs - 8.12).abs() < 0.001);
    }

    #[test]
    fn test_parse_time_marker_hours() {
        let secs = parse_time_marker("time=01:02:03.50 speed=1x").unwrap();
        assert!((secs - 3723.5).abs() < 0.001);
    }

    #[test]
    fn test_parse_time_marker_absent_or_invalid() {
        assert!(parse_time_marker("frame=  240 fps= 60").is_none());
        assert!(parse_time_marker("time=N/A bitrate=N/A").is_none());
        assert!(parse_time_marker("time=garbage").is_none());
    }

    #[test]
    fn test_progress_percent_clamps_at_99() {
        assert_eq!(progress_percent(30.0, 60.0), 50);
        assert_eq!(progress_percent(60.0, 60.0), 99);
        assert_eq!(progress_percent(120.0, 60.0), 99);
    }

    #[test]
    fn test_progress_percent_is_monotonic_in_elapsed() {
        let mut last = 0;
        for tenths in 0..900 {
            let p = progress_percent(tenths as f64 / 10.0, 60.0);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_progress_percent_falls_back_to_default_target() {
        assert_eq!(progress_percent(30.0, 0.0), 50);
    }
}
