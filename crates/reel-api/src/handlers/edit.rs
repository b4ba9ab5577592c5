//! Edit submission handlers.
//!
//! Each endpoint validates the request, submits it to the engine and
//! returns 202 with the job id; clients poll the job endpoint for progress.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use reel_models::{
    BrandRequest, ConcatRequest, ExportRequest, JobId, TransitionRequest, TrimRequest,
};

use crate::error::ApiResult;
use crate::state::AppState;

/// Response for an accepted edit submission.
#[derive(Serialize)]
pub struct SubmitResponse {
    pub job_id: JobId,
}

fn accepted(job_id: JobId) -> (StatusCode, Json<SubmitResponse>) {
    (StatusCode::ACCEPTED, Json(SubmitResponse { job_id }))
}

/// Concatenate two or more videos.
pub async fn submit_concat(
    State(state): State<AppState>,
    Json(req): Json<ConcatRequest>,
) -> ApiResult<(StatusCode, Json<SubmitResponse>)> {
    let job_id = state.editor.submit_concat(req).await?;
    Ok(accepted(job_id))
}

/// Trim a video to a time range.
pub async fn submit_trim(
    State(state): State<AppState>,
    Json(req): Json<TrimRequest>,
) -> ApiResult<(StatusCode, Json<SubmitResponse>)> {
    let job_id = state.editor.submit_trim(req).await?;
    Ok(accepted(job_id))
}

/// Add branding (intro/outro or lower third) to a video.
pub async fn submit_brand(
    State(state): State<AppState>,
    Json(req): Json<BrandRequest>,
) -> ApiResult<(StatusCode, Json<SubmitResponse>)> {
    let job_id = state.editor.submit_brand(req).await?;
    Ok(accepted(job_id))
}

/// Blend two videos with a transition effect.
pub async fn submit_transition(
    State(state): State<AppState>,
    Json(req): Json<TransitionRequest>,
) -> ApiResult<(StatusCode, Json<SubmitResponse>)> {
    let job_id = state.editor.submit_transition(req).await?;
    Ok(accepted(job_id))
}

/// Export a video to a target format/resolution/quality.
pub async fn submit_export(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> ApiResult<(StatusCode, Json<SubmitResponse>)> {
    let job_id = state.editor.submit_export(req).await?;
    Ok(accepted(job_id))
}
