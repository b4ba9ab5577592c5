//! Application state.

use std::sync::Arc;

use reel_engine::{EditorService, EngineConfig};
use reel_store::{JobStore, MediaStore, StorageLayout, StoreResult};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub editor: Arc<EditorService>,
    pub job_store: JobStore,
    pub media_store: MediaStore,
}

impl AppState {
    /// Create new application state over the given storage layout,
    /// creating the directory tree if needed.
    pub async fn new(config: ApiConfig, layout: StorageLayout) -> StoreResult<Self> {
        layout.ensure_dirs().await?;

        let job_store = JobStore::new(layout.clone());
        let media_store = MediaStore::new(layout.clone());
        let editor = Arc::new(EditorService::new(
            layout,
            job_store.clone(),
            media_store.clone(),
            EngineConfig::from_env(),
        ));

        Ok(Self {
            config,
            editor,
            job_store,
            media_store,
        })
    }
}
