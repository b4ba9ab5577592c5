//! Media library handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use reel_models::{MediaId, MediaRecord, MediaSource, MediaUpdate};
use reel_store::MediaFilter;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for the media listing.
#[derive(Debug, Default, Deserialize)]
pub struct MediaListQuery {
    pub source: Option<MediaSource>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Media listing response.
#[derive(Serialize)]
pub struct MediaListResponse {
    pub media: Vec<MediaRecord>,
    pub count: usize,
}

/// List media records, newest first.
pub async fn list_media(
    State(state): State<AppState>,
    Query(query): Query<MediaListQuery>,
) -> ApiResult<Json<MediaListResponse>> {
    let filter = MediaFilter {
        source: query.source,
        category: query.category,
        tag: query.tag,
        limit: query.limit,
        offset: query.offset,
    };
    let media = state.media_store.list(&filter).await?;
    let count = media.len();
    Ok(Json(MediaListResponse { media, count }))
}

/// Get a single media record.
pub async fn get_media(
    State(state): State<AppState>,
    Path(media_id): Path<String>,
) -> ApiResult<Json<MediaRecord>> {
    let id = MediaId::from(media_id);
    let record = state
        .media_store
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("media {} not found", id)))?;
    Ok(Json(record))
}

/// Update media metadata (identity fields are immutable).
pub async fn update_media(
    State(state): State<AppState>,
    Path(media_id): Path<String>,
    Json(update): Json<MediaUpdate>,
) -> ApiResult<Json<MediaRecord>> {
    let id = MediaId::from(media_id);
    let record = state
        .media_store
        .update(&id, update)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("media {} not found", id)))?;
    Ok(Json(record))
}

/// Delete a media record and its file.
pub async fn delete_media(
    State(state): State<AppState>,
    Path(media_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = MediaId::from(media_id);
    if state.media_store.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("media {} not found", id)))
    }
}
