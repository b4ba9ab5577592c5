//! The edit operations.
//!
//! Every operation follows the same skeleton: create a pending job, mark it
//! processing, resolve the referenced media, build the FFmpeg invocation,
//! run it under the concurrency limit, register the produced file as an
//! edited media record, and mark the job completed. Any failure along the
//! way marks the job failed with a descriptive message.

use chrono::Utc;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::{watch, Mutex, Semaphore};
use tracing::{info, warn};

use reel_media::progress::DEFAULT_TARGET_DURATION_SECS;
use reel_media::{
    lower_third_filter, probe_duration, scale_filter, transition_filter, FfmpegCommand,
    FfmpegRunner,
};
use reel_models::{
    BrandRequest, ConcatRequest, ExportRequest, Job, JobId, JobStatus, JobUpdate, MediaRecord,
    MediaSource, OutputDescriptor, TransitionKind, TransitionRequest, TrimRequest,
};
use reel_store::{JobStore, MediaStore, StorageLayout, StoreError};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::progress::JobProgressWriter;

/// Orchestrates edit operations as asynchronous jobs.
///
/// Requests are validated synchronously; everything after job creation runs
/// on a spawned task, so callers get the job id back immediately and poll
/// the job store for progress.
#[derive(Clone)]
pub struct EditorService {
    layout: StorageLayout,
    job_store: JobStore,
    media_store: MediaStore,
    config: EngineConfig,
    ffmpeg_permits: Arc<Semaphore>,
    active: Arc<Mutex<HashMap<JobId, watch::Sender<bool>>>>,
}

impl EditorService {
    pub fn new(
        layout: StorageLayout,
        job_store: JobStore,
        media_store: MediaStore,
        config: EngineConfig,
    ) -> Self {
        let permits = config.max_ffmpeg_processes;
        Self {
            layout,
            job_store,
            media_store,
            config,
            ffmpeg_permits: Arc::new(Semaphore::new(permits)),
            active: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn job_store(&self) -> &JobStore {
        &self.job_store
    }

    pub fn media_store(&self) -> &MediaStore {
        &self.media_store
    }

    /// Signal cancellation to an in-flight job.
    ///
    /// Returns false when the job is not currently running (unknown id or
    /// already terminal); the caller decides whether that is a 404.
    pub async fn cancel(&self, job_id: &JobId) -> bool {
        match self.active.lock().await.get(job_id) {
            Some(tx) => tx.send(true).is_ok(),
            None => false,
        }
    }

    // -- submission ----------------------------------------------------------

    pub async fn submit_concat(&self, req: ConcatRequest) -> EngineResult<JobId> {
        req.validate()?;
        self.spawn_job("concat", move |svc, job_id, cancel| async move {
            svc.run_concat(&job_id, cancel, req).await
        })
        .await
    }

    pub async fn submit_trim(&self, req: TrimRequest) -> EngineResult<JobId> {
        req.validate()?;
        self.spawn_job("trim", move |svc, job_id, cancel| async move {
            svc.run_trim(&job_id, cancel, req).await
        })
        .await
    }

    pub async fn submit_brand(&self, req: BrandRequest) -> EngineResult<JobId> {
        req.validate()?;
        self.spawn_job("brand", move |svc, job_id, cancel| async move {
            svc.run_brand(&job_id, cancel, req).await
        })
        .await
    }

    pub async fn submit_transition(&self, req: TransitionRequest) -> EngineResult<JobId> {
        req.validate()?;
        self.spawn_job("transition", move |svc, job_id, cancel| async move {
            svc.run_transition(&job_id, cancel, req).await
        })
        .await
    }

    pub async fn submit_export(&self, req: ExportRequest) -> EngineResult<JobId> {
        req.validate()?;
        self.spawn_job("export", move |svc, job_id, cancel| async move {
            svc.run_export(&job_id, cancel, req).await
        })
        .await
    }

    /// Create the job, register its cancellation channel, and run the
    /// operation on a detached task.
    async fn spawn_job<F, Fut>(&self, operation: &'static str, run: F) -> EngineResult<JobId>
    where
        F: FnOnce(EditorService, JobId, watch::Receiver<bool>) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = EngineResult<MediaRecord>> + Send + 'static,
    {
        let job = self.job_store.create().await?;
        let job_id = job.id.clone();

        let (cancel_tx, cancel_rx) = watch::channel(false);
        self.active.lock().await.insert(job_id.clone(), cancel_tx);
        info!(job_id = %job_id, operation, "job submitted");

        let svc = self.clone();
        let id = job_id.clone();
        tokio::spawn(async move {
            let outcome = run(svc.clone(), id.clone(), cancel_rx).await;
            svc.finish(&id, operation, outcome).await;
        });

        Ok(job_id)
    }

    /// Record the outcome and drop the cancellation handle.
    async fn finish(&self, job_id: &JobId, operation: &str, outcome: EngineResult<MediaRecord>) {
        self.active.lock().await.remove(job_id);

        let update = match &outcome {
            Ok(record) => {
                info!(job_id = %job_id, operation, media_id = %record.id, "job completed");
                JobUpdate::completed(record.path.clone())
            }
            Err(e) => {
                warn!(job_id = %job_id, operation, error = %e, "job failed");
                JobUpdate::failed(e.to_string())
            }
        };
        if let Err(e) = self.job_store.update(job_id, update).await {
            warn!(job_id = %job_id, error = %e, "failed to persist job outcome");
        }
    }

    // -- operations ----------------------------------------------------------

    async fn run_concat(
        &self,
        job_id: &JobId,
        cancel: watch::Receiver<bool>,
        req: ConcatRequest,
    ) -> EngineResult<MediaRecord> {
        self.mark_processing(job_id).await?;

        let mut sources = Vec::with_capacity(req.videos.len());
        for id in &req.videos {
            sources.push(self.resolve(id).await?);
        }

        let temp_dir = self.job_temp_dir(job_id).await?;
        let list_path = temp_dir.join("filelist.txt");
        let body = concat_list_body(sources.iter().map(|r| r.path.as_path()));
        fs::write(&list_path, body).await.map_err(StoreError::Io)?;

        let mut target = 0.0;
        for record in &sources {
            target += self.source_duration(record).await;
        }

        let (output_path, filename) = self.output_target(&req.output, "concatenated", "mp4");
        let cmd = concat_command(&list_path, &output_path);

        let result = self.execute(job_id, cancel, &cmd, target).await;
        let _ = fs::remove_dir_all(&temp_dir).await;
        result?;

        self.register_output(&output_path, &filename, &req.output, None, None, &[])
            .await
    }

    async fn run_trim(
        &self,
        job_id: &JobId,
        cancel: watch::Receiver<bool>,
        req: TrimRequest,
    ) -> EngineResult<MediaRecord> {
        self.mark_processing(job_id).await?;
        let source = self.resolve(&req.video_id).await?;

        let (output_path, filename) = self.output_target(&req.output, "trimmed", "mp4");
        let cmd = trim_command(&source.path, req.start_time, req.end_time, &output_path);

        self.execute(job_id, cancel, &cmd, req.end_time - req.start_time)
            .await?;
        self.register_output(&output_path, &filename, &req.output, None, None, &[])
            .await
    }

    async fn run_brand(
        &self,
        job_id: &JobId,
        cancel: watch::Receiver<bool>,
        req: BrandRequest,
    ) -> EngineResult<MediaRecord> {
        self.mark_processing(job_id).await?;
        let source = self.resolve(&req.video_id).await?;
        let (output_path, filename) = self.output_target(&req.output, "branded", "mp4");

        // Intro+outro concat takes precedence over the lower third; with
        // neither set the source is passed through as a new record.
        if let (Some(intro_id), Some(outro_id)) = (&req.intro, &req.outro) {
            let intro = self.resolve(intro_id).await?;
            let outro = self.resolve(outro_id).await?;

            let temp_dir = self.job_temp_dir(job_id).await?;
            let list_path = temp_dir.join("filelist.txt");
            let body = concat_list_body(
                [&intro.path, &source.path, &outro.path]
                    .into_iter()
                    .map(PathBuf::as_path),
            );
            fs::write(&list_path, body).await.map_err(StoreError::Io)?;

            let target = self.source_duration(&intro).await
                + self.source_duration(&source).await
                + self.source_duration(&outro).await;
            let cmd = concat_command(&list_path, &output_path);

            let result = self.execute(job_id, cancel, &cmd, target).await;
            let _ = fs::remove_dir_all(&temp_dir).await;
            result?;
        } else if let Some(lower_third) = &req.lower_third {
            let temp_dir = self.job_temp_dir(job_id).await?;
            let text_path = temp_dir.join("lower_third.txt");
            fs::write(&text_path, &lower_third.text)
                .await
                .map_err(StoreError::Io)?;

            let filter = lower_third_filter(lower_third, &text_path, &self.config.font_path);
            let cmd = overlay_command(&source.path, filter, &output_path);
            let target = self.source_duration(&source).await;

            let result = self.execute(job_id, cancel, &cmd, target).await;
            let _ = fs::remove_dir_all(&temp_dir).await;
            result?;
        } else {
            let cmd = passthrough_command(&source.path, &output_path);
            let target = self.source_duration(&source).await;
            self.execute(job_id, cancel, &cmd, target).await?;
        }

        self.register_output(&output_path, &filename, &req.output, None, None, &[])
            .await
    }

    async fn run_transition(
        &self,
        job_id: &JobId,
        cancel: watch::Receiver<bool>,
        req: TransitionRequest,
    ) -> EngineResult<MediaRecord> {
        self.mark_processing(job_id).await?;
        let first = self.resolve(&req.video1).await?;
        let second = self.resolve(&req.video2).await?;

        let (output_path, filename) = self.output_target(&req.output, "transition", "mp4");
        let cmd = transition_command(&first.path, &second.path, req.kind, req.duration, &output_path);

        let target = (self.source_duration(&first).await + self.source_duration(&second).await
            - req.duration)
            .max(req.duration);
        self.execute(job_id, cancel, &cmd, target).await?;

        let extra_tags = ["transition".to_string(), req.kind.as_str().to_string()];
        self.register_output(
            &output_path,
            &filename,
            &req.output,
            Some("transitions"),
            Some(format!("Transition ({}) between videos", req.kind)),
            &extra_tags,
        )
        .await
    }

    async fn run_export(
        &self,
        job_id: &JobId,
        cancel: watch::Receiver<bool>,
        req: ExportRequest,
    ) -> EngineResult<MediaRecord> {
        self.mark_processing(job_id).await?;
        let source = self.resolve(&req.video_id).await?;

        let (output_path, filename) =
            self.output_target(&req.output, "exported", req.format.extension());
        let cmd = export_command(&source.path, &req, &output_path);

        let target = self.source_duration(&source).await;
        self.execute(job_id, cancel, &cmd, target).await?;

        let extra_tags = ["exported".to_string(), req.format.as_str().to_string()];
        self.register_output(
            &output_path,
            &filename,
            &req.output,
            None,
            Some(format!("Exported video ({})", req.format)),
            &extra_tags,
        )
        .await
    }

    // -- shared steps --------------------------------------------------------

    async fn mark_processing(&self, job_id: &JobId) -> EngineResult<Option<Job>> {
        Ok(self
            .job_store
            .update(job_id, JobUpdate::status(JobStatus::Processing))
            .await?)
    }

    async fn resolve(&self, id: &reel_models::MediaId) -> EngineResult<MediaRecord> {
        self.media_store
            .get(id)
            .await?
            .ok_or_else(|| EngineError::MissingMedia(id.clone()))
    }

    /// Output location under the edited tree, defaulting to a timestamped
    /// filename when the request does not name one.
    fn output_target(&self, descriptor: &OutputDescriptor, stem: &str, ext: &str) -> (PathBuf, String) {
        let filename = descriptor
            .filename
            .clone()
            .unwrap_or_else(|| format!("{}-{}.{}", stem, Utc::now().timestamp_millis(), ext));
        (self.layout.edited_dir().join(&filename), filename)
    }

    /// Job-scoped scratch directory for list and text files.
    async fn job_temp_dir(&self, job_id: &JobId) -> EngineResult<PathBuf> {
        let dir = self.layout.job_temp_dir(job_id);
        fs::create_dir_all(&dir).await.map_err(StoreError::Io)?;
        Ok(dir)
    }

    /// Known duration of a source, probing when the record has none.
    async fn source_duration(&self, record: &MediaRecord) -> f64 {
        match record.duration {
            Some(d) => d,
            None => probe_duration(&record.path)
                .await
                .unwrap_or(DEFAULT_TARGET_DURATION_SECS),
        }
    }

    /// Record the invocation on the job and run it under the process limit.
    async fn execute(
        &self,
        job_id: &JobId,
        cancel: watch::Receiver<bool>,
        cmd: &FfmpegCommand,
        target_duration: f64,
    ) -> EngineResult<()> {
        self.job_store
            .update(job_id, JobUpdate::command(cmd.to_command_string()))
            .await?;

        let _permit = self
            .ffmpeg_permits
            .acquire()
            .await
            .expect("process semaphore never closes");

        let observer = Arc::new(JobProgressWriter::new(
            self.job_store.clone(),
            job_id.clone(),
        ));
        let runner = FfmpegRunner::new()
            .with_cancel(cancel)
            .with_timeout(self.config.job_timeout_secs)
            .with_target_duration(target_duration);

        runner.run(cmd, observer).await?;
        Ok(())
    }

    /// Stat the produced file and register it as an edited media record.
    ///
    /// Descriptor metadata wins; the operation-specific category,
    /// description and tags only fill the gaps the request left open.
    async fn register_output(
        &self,
        output_path: &Path,
        filename: &str,
        descriptor: &OutputDescriptor,
        default_category: Option<&str>,
        default_description: Option<String>,
        extra_tags: &[String],
    ) -> EngineResult<MediaRecord> {
        let size = fs::metadata(output_path).await.map_err(StoreError::Io)?.len();
        let duration = probe_duration(output_path).await.ok();

        let mut tags = descriptor.tags.clone();
        tags.extend(extra_tags.iter().cloned());

        let record = MediaRecord::new(
            MediaSource::Edited,
            filename,
            output_path.to_path_buf(),
            self.layout.url_for(MediaSource::Edited, filename),
            size,
        )
        .with_category(
            descriptor
                .category
                .clone()
                .or_else(|| default_category.map(String::from)),
        )
        .with_tags(tags)
        .with_description(descriptor.description.clone().or(default_description))
        .with_duration(duration);

        self.media_store.create(&record).await?;
        Ok(record)
    }
}

// -- invocation construction -------------------------------------------------

/// Demuxer-concat list body: one `file '<path>'` line per source, in order.
fn concat_list_body<'a>(paths: impl IntoIterator<Item = &'a Path>) -> String {
    let mut body = String::new();
    for path in paths {
        body.push_str(&format!("file '{}'\n", path.display()));
    }
    body
}

fn concat_command(list_path: &Path, output: &Path) -> FfmpegCommand {
    FfmpegCommand::new(output).concat_list(list_path).stream_copy()
}

fn trim_command(input: &Path, start: f64, end: f64, output: &Path) -> FfmpegCommand {
    FfmpegCommand::new(output)
        .input(input)
        .seek(start)
        .until(end)
        .stream_copy()
}

/// Lower-third overlay: the video is re-encoded through drawtext, the audio
/// stream is copied untouched.
fn overlay_command(input: &Path, filter: String, output: &Path) -> FfmpegCommand {
    FfmpegCommand::new(output)
        .input(input)
        .video_filter(filter)
        .audio_copy()
}

fn passthrough_command(input: &Path, output: &Path) -> FfmpegCommand {
    FfmpegCommand::new(output).input(input).stream_copy()
}

fn transition_command(
    first: &Path,
    second: &Path,
    kind: TransitionKind,
    duration: f64,
    output: &Path,
) -> FfmpegCommand {
    FfmpegCommand::new(output)
        .input(first)
        .input(second)
        .filter_complex(transition_filter(kind, duration))
        .map("[outv]")
        .video_codec("libx264")
}

/// Export invocation. Codecs always follow the container; resolution,
/// quality tier and frame rate are emitted only when requested, so an
/// export without a tier leaves rate control to the encoder defaults.
fn export_command(input: &Path, req: &ExportRequest, output: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new(output).input(input);

    if let Some(res) = req.resolution {
        cmd = cmd.video_filter(scale_filter(res.width, res.height));
    }
    cmd = cmd.video_codec(req.format.video_codec());
    if let Some(tier) = req.quality {
        cmd = cmd.crf(tier.crf(req.format));
    }
    cmd = cmd.audio_codec(req.format.audio_codec());
    if let Some(tier) = req.quality {
        cmd = cmd.audio_bitrate(tier.audio_bitrate());
    }
    if let Some(fps) = req.fps {
        cmd = cmd.frame_rate(fps);
    }
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_models::{
        ExportFormat, LowerThird, LowerThirdPosition, MediaId, QualityTier, RequestError,
        Resolution,
    };
    use reel_store::MediaFilter;
    use std::time::Duration;
    use tempfile::TempDir;

    async fn service() -> (TempDir, Arc<EditorService>) {
        let dir = TempDir::new().unwrap();
        let layout = StorageLayout::new(dir.path());
        layout.ensure_dirs().await.unwrap();
        let svc = EditorService::new(
            layout.clone(),
            JobStore::new(layout.clone()),
            MediaStore::new(layout),
            EngineConfig::default(),
        );
        (dir, Arc::new(svc))
    }

    async fn wait_terminal(store: &JobStore, id: &JobId) -> Job {
        for _ in 0..200 {
            if let Some(job) = store.get(id).await.unwrap() {
                if job.status.is_terminal() {
                    return job;
                }
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("job never reached a terminal state");
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_submission() {
        let (_dir, svc) = service().await;
        let req = TrimRequest {
            video_id: MediaId::from("upload-1-aaaa"),
            start_time: 9.0,
            end_time: 3.0,
            output: OutputDescriptor::default(),
        };
        let err = svc.submit_trim(req).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Invalid(RequestError::InvalidTimeRange { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_media_fails_the_job() {
        let (_dir, svc) = service().await;
        let req = TrimRequest {
            video_id: MediaId::from("upload-1-missing"),
            start_time: 0.0,
            end_time: 5.0,
            output: OutputDescriptor::default(),
        };

        let job_id = svc.submit_trim(req).await.unwrap();
        let job = wait_terminal(svc.job_store(), &job_id).await;

        assert_eq!(job.status, JobStatus::Failed);
        assert!(job
            .error_message
            .as_deref()
            .unwrap()
            .contains("upload-1-missing"));
        // No media record was registered
        let media = svc.media_store().list(&MediaFilter::default()).await.unwrap();
        assert!(media.is_empty());
    }

    #[tokio::test]
    async fn test_cancel_unknown_job_reports_not_running() {
        let (_dir, svc) = service().await;
        assert!(!svc.cancel(&JobId::from("job-0-deadbeef")).await);
    }

    #[test]
    fn test_concat_list_body_format() {
        let a = PathBuf::from("/data/videos/upload/a.mp4");
        let b = PathBuf::from("/data/videos/upload/b.mp4");
        let body = concat_list_body([a.as_path(), b.as_path()]);
        assert_eq!(
            body,
            "file '/data/videos/upload/a.mp4'\nfile '/data/videos/upload/b.mp4'\n"
        );
    }

    #[test]
    fn test_brand_mode_commands() {
        let input = PathBuf::from("/in/main.mp4");
        let output = PathBuf::from("/out/branded.mp4");

        let passthrough = passthrough_command(&input, &output).build_args().join(" ");
        assert!(passthrough.contains("-c copy"));

        let lt = LowerThird {
            text: "Subscribe".to_string(),
            position: LowerThirdPosition::Bottom,
            duration: 4.0,
            start_time: 1.0,
        };
        let filter = lower_third_filter(&lt, Path::new("/tmp/t.txt"), "/fonts/f.ttf");
        let overlay = overlay_command(&input, filter, &output).build_args().join(" ");
        assert!(overlay.contains("drawtext"));
        assert!(overlay.contains("-c:a copy"));
        assert!(!overlay.contains("-c copy"));
    }

    #[test]
    fn test_transition_command_reencodes() {
        let cmd = transition_command(
            Path::new("/in/a.mp4"),
            Path::new("/in/b.mp4"),
            TransitionKind::Wipe,
            1.0,
            Path::new("/out/t.mp4"),
        );
        let joined = cmd.build_args().join(" ");
        assert!(joined.contains("xfade=transition=wiperight"));
        assert!(joined.contains("-map [outv]"));
        assert!(joined.contains("-c:v libx264"));
    }

    #[test]
    fn test_export_command_webm_stack() {
        let req = ExportRequest {
            video_id: MediaId::from("upload-1-aaaa"),
            format: ExportFormat::Webm,
            resolution: Some(Resolution {
                width: 1280,
                height: 720,
            }),
            quality: Some(QualityTier::High),
            fps: Some(30.0),
            output: OutputDescriptor::default(),
        };
        let joined = export_command(Path::new("/in/a.mp4"), &req, Path::new("/out/a.webm"))
            .build_args()
            .join(" ");
        assert!(joined.contains("-vf scale=1280:720"));
        assert!(joined.contains("-c:v libvpx-vp9"));
        assert!(joined.contains("-crf 24"));
        assert!(joined.contains("-c:a libopus"));
        assert!(joined.contains("-b:a 192k"));
        assert!(joined.contains("-r 30"));
    }

    #[test]
    fn test_export_command_without_quality_omits_rate_args() {
        let req = ExportRequest {
            video_id: MediaId::from("upload-1-aaaa"),
            format: ExportFormat::Webm,
            resolution: None,
            quality: None,
            fps: None,
            output: OutputDescriptor::default(),
        };
        let args = export_command(Path::new("/in/a.mp4"), &req, Path::new("/out/a.webm"))
            .build_args();
        // Rate control is left to the encoder when no tier is requested
        assert!(!args.contains(&"-crf".to_string()));
        assert!(!args.contains(&"-b:a".to_string()));

        let joined = args.join(" ");
        assert!(joined.contains("-c:v libvpx-vp9"));
        assert!(joined.contains("-c:a libopus"));
        assert!(!joined.contains("-vf"));
    }

    #[tokio::test]
    async fn test_register_output_fills_default_description_and_category() {
        let (_dir, svc) = service().await;
        let path = svc.layout.edited_dir().join("transition-1.mp4");
        tokio::fs::write(&path, b"fake video bytes").await.unwrap();

        let record = svc
            .register_output(
                &path,
                "transition-1.mp4",
                &OutputDescriptor::default(),
                Some("transitions"),
                Some("Transition (fade) between videos".to_string()),
                &["transition".to_string(), "fade".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(
            record.description.as_deref(),
            Some("Transition (fade) between videos")
        );
        assert_eq!(record.category.as_deref(), Some("transitions"));
        assert!(record.tags.contains(&"fade".to_string()));
    }

    #[tokio::test]
    async fn test_register_output_keeps_explicit_description() {
        let (_dir, svc) = service().await;
        let path = svc.layout.edited_dir().join("exported-1.webm");
        tokio::fs::write(&path, b"fake video bytes").await.unwrap();

        let descriptor = OutputDescriptor {
            description: Some("my highlight reel".to_string()),
            ..Default::default()
        };
        let record = svc
            .register_output(
                &path,
                "exported-1.webm",
                &descriptor,
                None,
                Some("Exported video (webm)".to_string()),
                &["exported".to_string(), "webm".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(record.description.as_deref(), Some("my highlight reel"));
    }

    #[tokio::test]
    async fn test_output_target_defaults_are_timestamped() {
        let (_dir, svc) = service().await;
        let (path, filename) = svc.output_target(&OutputDescriptor::default(), "trimmed", "mp4");
        assert!(filename.starts_with("trimmed-"));
        assert!(filename.ends_with(".mp4"));
        assert!(path.ends_with(&filename));

        let named = OutputDescriptor {
            filename: Some("cut.mp4".to_string()),
            ..Default::default()
        };
        let (_, filename) = svc.output_target(&named, "trimmed", "mp4");
        assert_eq!(filename, "cut.mp4");
    }
}
