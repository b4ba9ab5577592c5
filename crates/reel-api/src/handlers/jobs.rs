//! Job status handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use reel_models::{Job, JobId};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Get the full job document.
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<Job>> {
    let id = JobId::from(job_id);
    let job = state
        .job_store
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("job {} not found", id)))?;
    Ok(Json(job))
}

/// Response for a cancellation request.
#[derive(Serialize)]
pub struct CancelResponse {
    pub job_id: JobId,
    /// Whether a running job was signalled; false when it already finished
    pub cancelled: bool,
}

/// Signal cancellation to an in-flight job.
pub async fn cancel_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> ApiResult<(StatusCode, Json<CancelResponse>)> {
    let id = JobId::from(job_id);
    if state.job_store.get(&id).await?.is_none() {
        return Err(ApiError::not_found(format!("job {} not found", id)));
    }

    let cancelled = state.editor.cancel(&id).await;
    Ok((
        StatusCode::ACCEPTED,
        Json(CancelResponse {
            job_id: id,
            cancelled,
        }),
    ))
}
