//! FFmpeg command builder and runner.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::{MediaError, MediaResult};
use crate::progress::{progress_percent, parse_time_marker, ProgressObserver, DEFAULT_TARGET_DURATION_SECS};

/// How many trailing stderr lines are kept for error reporting.
const STDERR_TAIL_LINES: usize = 40;

/// Builder for FFmpeg invocations.
///
/// Supports multiple inputs (transition graphs take two) and arbitrary
/// output arguments; the edit operations compose their argument lists
/// through this builder so the exact invocation can be recorded on the job.
#[derive(Debug, Clone)]
pub struct FfmpegCommand {
    /// (args before -i, input path) pairs, in order
    inputs: Vec<(Vec<String>, PathBuf)>,
    /// Arguments after the inputs
    output_args: Vec<String>,
    /// Output file path
    output: PathBuf,
    /// Whether to overwrite output
    overwrite: bool,
}

impl FfmpegCommand {
    /// Create a new command producing `output`.
    pub fn new(output: impl AsRef<Path>) -> Self {
        Self {
            inputs: Vec::new(),
            output_args: Vec::new(),
            output: output.as_ref().to_path_buf(),
            overwrite: true,
        }
    }

    /// Add a plain input file.
    pub fn input(mut self, path: impl AsRef<Path>) -> Self {
        self.inputs.push((Vec::new(), path.as_ref().to_path_buf()));
        self
    }

    /// Add an input with arguments placed before its `-i`.
    pub fn input_with_args<I, S>(mut self, args: I, path: impl AsRef<Path>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.push((
            args.into_iter().map(Into::into).collect(),
            path.as_ref().to_path_buf(),
        ));
        self
    }

    /// Add a demuxer-concat list file input (`-f concat -safe 0 -i list`).
    pub fn concat_list(self, list_path: impl AsRef<Path>) -> Self {
        self.input_with_args(["-f", "concat", "-safe", "0"], list_path)
    }

    /// Add a single output argument.
    pub fn output_arg(mut self, arg: impl Into<String>) -> Self {
        self.output_args.push(arg.into());
        self
    }

    /// Add multiple output arguments.
    pub fn output_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Seek to a position in the output timeline (`-ss`).
    pub fn seek(self, seconds: f64) -> Self {
        self.output_arg("-ss").output_arg(format!("{}", seconds))
    }

    /// Stop writing at a position (`-to`).
    pub fn until(self, seconds: f64) -> Self {
        self.output_arg("-to").output_arg(format!("{}", seconds))
    }

    /// Copy all streams without re-encoding (`-c copy`).
    pub fn stream_copy(self) -> Self {
        self.output_arg("-c").output_arg("copy")
    }

    /// Set video filter (`-vf`).
    pub fn video_filter(self, filter: impl Into<String>) -> Self {
        self.output_arg("-vf").output_arg(filter)
    }

    /// Set filter complex.
    pub fn filter_complex(self, filter: impl Into<String>) -> Self {
        self.output_arg("-filter_complex").output_arg(filter)
    }

    /// Map an output stream label.
    pub fn map(self, label: impl Into<String>) -> Self {
        self.output_arg("-map").output_arg(label)
    }

    /// Set video codec (`-c:v`).
    pub fn video_codec(self, codec: impl Into<String>) -> Self {
        self.output_arg("-c:v").output_arg(codec)
    }

    /// Set audio codec (`-c:a`).
    pub fn audio_codec(self, codec: impl Into<String>) -> Self {
        self.output_arg("-c:a").output_arg(codec)
    }

    /// Copy the audio stream untouched.
    pub fn audio_copy(self) -> Self {
        self.audio_codec("copy")
    }

    /// Set CRF (quality).
    pub fn crf(self, crf: u8) -> Self {
        self.output_arg("-crf").output_arg(crf.to_string())
    }

    /// Set audio bitrate (`-b:a`).
    pub fn audio_bitrate(self, bitrate: impl Into<String>) -> Self {
        self.output_arg("-b:a").output_arg(bitrate)
    }

    /// Set output frame rate (`-r`).
    pub fn frame_rate(self, fps: f64) -> Self {
        self.output_arg("-r").output_arg(format!("{}", fps))
    }

    /// Build the full argument list.
    pub fn build_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.overwrite {
            args.push("-y".to_string());
        }

        // Quiet logs but keep stats lines, which carry the time= marker
        args.push("-v".to_string());
        args.push("error".to_string());
        args.push("-stats".to_string());

        for (input_args, path) in &self.inputs {
            args.extend(input_args.clone());
            args.push("-i".to_string());
            args.push(path.to_string_lossy().to_string());
        }

        args.extend(self.output_args.clone());
        args.push(self.output.to_string_lossy().to_string());

        args
    }

    /// Human-readable form recorded on the job for diagnostics.
    pub fn to_command_string(&self) -> String {
        format!("ffmpeg {}", self.build_args().join(" "))
    }
}

/// Runner for FFmpeg commands with progress tracking, cancellation and a
/// wall-clock timeout.
pub struct FfmpegRunner {
    cancel_rx: Option<watch::Receiver<bool>>,
    timeout_secs: Option<u64>,
    target_duration_secs: f64,
}

impl Default for FfmpegRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl FfmpegRunner {
    pub fn new() -> Self {
        Self {
            cancel_rx: None,
            timeout_secs: None,
            target_duration_secs: DEFAULT_TARGET_DURATION_SECS,
        }
    }

    /// Set cancellation signal.
    pub fn with_cancel(mut self, cancel_rx: watch::Receiver<bool>) -> Self {
        self.cancel_rx = Some(cancel_rx);
        self
    }

    /// Set wall-clock timeout; a hung process is killed when it elapses.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Duration against which `time=` markers are converted to percentages.
    pub fn with_target_duration(mut self, secs: f64) -> Self {
        if secs > 0.0 {
            self.target_duration_secs = secs;
        }
        self
    }

    /// Run an FFmpeg command, streaming progress to `observer`.
    ///
    /// Resolves with captured stdout on exit code 0. A non-zero exit yields
    /// [`MediaError::FfmpegFailed`] carrying the exit code and the stderr
    /// tail; failure to launch yields [`MediaError::SpawnFailed`].
    pub async fn run(
        &self,
        cmd: &FfmpegCommand,
        observer: Arc<dyn ProgressObserver>,
    ) -> MediaResult<String> {
        which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)?;

        let args = cmd.build_args();
        debug!("running: ffmpeg {}", args.join(" "));

        let mut child = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(MediaError::SpawnFailed)?;

        let stderr = child.stderr.take().expect("stderr not captured");
        let mut stdout = child.stdout.take().expect("stdout not captured");

        // Parse progress markers off stderr while keeping a tail for errors
        let target = self.target_duration_secs;
        let stderr_handle = tokio::spawn(async move {
            let mut reader = BufReader::new(stderr).lines();
            let mut tail: VecDeque<String> = VecDeque::with_capacity(STDERR_TAIL_LINES);

            while let Ok(Some(line)) = reader.next_line().await {
                if let Some(elapsed) = parse_time_marker(&line) {
                    observer.on_progress(progress_percent(elapsed, target)).await;
                }
                if tail.len() == STDERR_TAIL_LINES {
                    tail.pop_front();
                }
                tail.push_back(line);
            }

            tail.into_iter().collect::<Vec<_>>().join("\n")
        });

        let stdout_handle = tokio::spawn(async move {
            let mut captured = String::new();
            let _ = stdout.read_to_string(&mut captured).await;
            captured
        });

        let status = self.wait_for_completion(&mut child).await;

        let stderr_tail = stderr_handle.await.unwrap_or_default();
        let captured_stdout = stdout_handle.await.unwrap_or_default();

        let status = status?;
        if status.success() {
            Ok(captured_stdout)
        } else {
            Err(MediaError::ffmpeg_failed(status.code(), stderr_tail))
        }
    }

    /// Wait for the child, honoring cancellation and the timeout.
    async fn wait_for_completion(&self, child: &mut Child) -> MediaResult<std::process::ExitStatus> {
        let mut cancel_rx = self.cancel_rx.clone();

        let wait = async {
            loop {
                match &mut cancel_rx {
                    Some(rx) => {
                        tokio::select! {
                            status = child.wait() => return status.map_err(MediaError::from),
                            changed = rx.changed() => {
                                if changed.is_err() || *rx.borrow() {
                                    info!("FFmpeg cancelled, killing process");
                                    let _ = child.kill().await;
                                    return Err(MediaError::Cancelled);
                                }
                            }
                        }
                    }
                    None => return child.wait().await.map_err(MediaError::from),
                }
            }
        };

        match self.timeout_secs {
            Some(secs) => {
                match tokio::time::timeout(std::time::Duration::from_secs(secs), wait).await {
                    Ok(result) => result,
                    Err(_) => {
                        warn!("FFmpeg timed out after {} seconds, killing process", secs);
                        let _ = child.kill().await;
                        Err(MediaError::Timeout(secs))
                    }
                }
            }
            None => wait.await,
        }
    }
}

/// Check if FFmpeg is available.
pub fn check_ffmpeg() -> MediaResult<PathBuf> {
    which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)
}

/// Check if FFprobe is available.
pub fn check_ffprobe() -> MediaResult<PathBuf> {
    which::which("ffprobe").map_err(|_| MediaError::FfprobeNotFound)
}
