//! API routes.

use axum::http::{header, HeaderValue, Method};
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::edit::{
    submit_brand, submit_concat, submit_export, submit_transition, submit_trim,
};
use crate::handlers::health;
use crate::handlers::jobs::{cancel_job, get_job_status};
use crate::handlers::media::{delete_media, get_media, list_media, update_media};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let edit_routes = Router::new()
        .route("/edit/concat", post(submit_concat))
        .route("/edit/trim", post(submit_trim))
        .route("/edit/brand", post(submit_brand))
        .route("/edit/transition", post(submit_transition))
        .route("/edit/export", post(submit_export));

    let job_routes = Router::new()
        .route("/jobs/:job_id", get(get_job_status))
        .route("/jobs/:job_id/cancel", post(cancel_job));

    let media_routes = Router::new()
        .route("/media", get(list_media))
        .route("/media/:media_id", get(get_media))
        .route("/media/:media_id", patch(update_media))
        .route("/media/:media_id", delete(delete_media));

    let api_routes = Router::new()
        .merge(edit_routes)
        .merge(job_routes)
        .merge(media_routes);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health))
        // Body size limit keeps oversized payloads away from the handlers
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if origins.iter().any(|o| o == "*") {
        // Wildcard origin; no credentials allowed
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
            .allow_origin(AllowOrigin::list(origins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::http::StatusCode;
    use reel_models::{JobStatus, MediaSource};
    use reel_store::{SaveFileOptions, StorageLayout};
    use std::time::Duration;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::ApiConfig;

    async fn app() -> (TempDir, AppState, Router) {
        let dir = TempDir::new().unwrap();
        let layout = StorageLayout::new(dir.path());
        let state = AppState::new(ApiConfig::default(), layout).await.unwrap();
        let router = create_router(state.clone());
        (dir, state, router)
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, _state, router) = app().await;
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_unknown_job_is_404() {
        let (_dir, _state, router) = app().await;
        let response = router
            .oneshot(
                Request::get("/api/jobs/job-0-deadbeef")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("job-0-deadbeef"));
    }

    #[tokio::test]
    async fn test_cancel_unknown_job_is_404() {
        let (_dir, _state, router) = app().await;
        let response = router
            .oneshot(json_post(
                "/api/jobs/job-0-deadbeef/cancel",
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_trim_is_400() {
        let (_dir, _state, router) = app().await;
        let response = router
            .oneshot(json_post(
                "/api/edit/trim",
                serde_json::json!({
                    "video_id": "upload-1-aaaa",
                    "start_time": 9.0,
                    "end_time": 2.0
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("invalid time range"));
    }

    #[tokio::test]
    async fn test_submit_returns_202_and_job_is_pollable() {
        let (_dir, state, router) = app().await;
        let response = router
            .clone()
            .oneshot(json_post(
                "/api/edit/trim",
                serde_json::json!({
                    "video_id": "upload-1-missing",
                    "start_time": 0.0,
                    "end_time": 5.0
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let body = body_json(response).await;
        let job_id = body["job_id"].as_str().unwrap().to_string();
        assert!(job_id.starts_with("job-"));

        // The referenced media does not exist, so the job fails; the status
        // endpoint must expose the terminal document
        let mut last = None;
        for _ in 0..200 {
            let response = router
                .clone()
                .oneshot(
                    Request::get(format!("/api/jobs/{}", job_id))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let job = body_json(response).await;
            if job["status"] == "failed" || job["status"] == "completed" {
                last = Some(job);
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let job = last.expect("job never reached a terminal state");
        assert_eq!(job["status"], "failed");
        assert!(job["error_message"]
            .as_str()
            .unwrap()
            .contains("upload-1-missing"));

        // Store agrees with the HTTP view
        let stored = state
            .job_store
            .get(&reel_models::JobId::from(job_id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, JobStatus::Failed);
    }

    #[tokio::test]
    async fn test_media_lifecycle_over_http() {
        let (dir, state, router) = app().await;

        // Register one media file directly through the store
        let src = dir.path().join("incoming.mp4");
        tokio::fs::write(&src, b"fake video bytes").await.unwrap();
        let record = state
            .media_store
            .save_file(&src, MediaSource::Upload, SaveFileOptions::default())
            .await
            .unwrap();

        // List
        let response = router
            .clone()
            .oneshot(Request::get("/api/media").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["count"], 1);

        // Filtered list misses
        let response = router
            .clone()
            .oneshot(
                Request::get("/api/media?source=edited")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["count"], 0);

        // Patch metadata
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/api/media/{}", record.id))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({ "description": "first upload" }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["description"], "first upload");

        // Delete, then the record is gone
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/media/{}", record.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router
            .oneshot(
                Request::get(format!("/api/media/{}", record.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
