//! Media record store.
//!
//! Metadata documents live under `videos/metadata/`, one JSON file per
//! record; the media files themselves live in the per-source directory tree.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use reel_models::{MediaId, MediaRecord, MediaSource, MediaUpdate};

use crate::error::{StoreError, StoreResult};
use crate::layout::StorageLayout;

/// Filter for listing media records.
#[derive(Debug, Clone, Default)]
pub struct MediaFilter {
    pub source: Option<MediaSource>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Options for registering a file into the media tree.
#[derive(Debug, Clone, Default)]
pub struct SaveFileOptions {
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub duration: Option<f64>,
}

/// Persists media records and the files they describe.
#[derive(Clone)]
pub struct MediaStore {
    layout: StorageLayout,
    write_lock: Arc<Mutex<()>>,
}

impl MediaStore {
    pub fn new(layout: StorageLayout) -> Self {
        Self {
            layout,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    fn record_path(&self, id: &MediaId) -> PathBuf {
        self.layout.metadata_dir().join(format!("{}.json", id))
    }

    /// Persist a record for a file that already exists on disk.
    ///
    /// Refuses to write a record whose `path` does not reference an existing
    /// file, so the store never contains dangling records.
    pub async fn create(&self, record: &MediaRecord) -> StoreResult<()> {
        if !fs::try_exists(&record.path).await.unwrap_or(false) {
            return Err(StoreError::DanglingPath(record.path.clone()));
        }
        let _guard = self.write_lock.lock().await;
        self.write_document(record).await?;
        debug!(media_id = %record.id, path = %record.path.display(), "registered media record");
        Ok(())
    }

    /// Fetch a record by id. Absence is a valid outcome.
    pub async fn get(&self, id: &MediaId) -> StoreResult<Option<MediaRecord>> {
        let path = self.record_path(id);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List records, newest first, applying the filter.
    pub async fn list(&self, filter: &MediaFilter) -> StoreResult<Vec<MediaRecord>> {
        let dir = self.layout.metadata_dir();
        let mut records = Vec::new();

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(records),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let bytes = fs::read(&path).await?;
            match serde_json::from_slice::<MediaRecord>(&bytes) {
                Ok(record) => records.push(record),
                // Skip unreadable documents rather than failing the listing
                Err(e) => warn!(path = %path.display(), error = %e, "skipping malformed media record"),
            }
        }

        if let Some(source) = filter.source {
            records.retain(|r| r.source == source);
        }
        if let Some(category) = &filter.category {
            records.retain(|r| r.category.as_deref() == Some(category.as_str()));
        }
        if let Some(tag) = &filter.tag {
            records.retain(|r| r.tags.iter().any(|t| t == tag));
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = filter.offset.unwrap_or(0);
        let records: Vec<MediaRecord> = records.into_iter().skip(offset).collect();
        Ok(match filter.limit {
            Some(limit) => records.into_iter().take(limit).collect(),
            None => records,
        })
    }

    /// Merge a partial metadata update into an existing record.
    ///
    /// Returns `None` if the record does not exist.
    pub async fn update(
        &self,
        id: &MediaId,
        update: MediaUpdate,
    ) -> StoreResult<Option<MediaRecord>> {
        let _guard = self.write_lock.lock().await;
        let Some(mut record) = self.get(id).await? else {
            return Ok(None);
        };
        record.apply(update);
        self.write_document(&record).await?;
        Ok(Some(record))
    }

    /// Delete a record and its file. Returns false if the record is absent.
    pub async fn delete(&self, id: &MediaId) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;
        let Some(record) = self.get(id).await? else {
            return Ok(false);
        };

        if let Err(e) = fs::remove_file(&record.path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                return Err(e.into());
            }
        }
        fs::remove_file(self.record_path(id)).await?;
        debug!(media_id = %id, "deleted media record");
        Ok(true)
    }

    /// Copy a file into the per-source media tree and register a record.
    ///
    /// This backs the upload and generation flows; edit operations write
    /// directly into the edited directory and register via [`create`].
    pub async fn save_file(
        &self,
        src: impl AsRef<Path>,
        source: MediaSource,
        options: SaveFileOptions,
    ) -> StoreResult<MediaRecord> {
        let src = src.as_ref();
        if !fs::try_exists(src).await.unwrap_or(false) {
            return Err(StoreError::SourceMissing(src.to_path_buf()));
        }

        let id = MediaId::new(source.as_str());
        let ext = src
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("mp4");
        let filename = format!("{}.{}", id, ext);
        let dest = self.layout.media_dir(source).join(&filename);

        fs::create_dir_all(self.layout.media_dir(source)).await?;
        fs::copy(src, &dest).await?;
        let size = fs::metadata(&dest).await?.len();

        let mut record = MediaRecord::new(
            source,
            filename.clone(),
            dest,
            self.layout.url_for(source, &filename),
            size,
        )
        .with_category(options.category)
        .with_tags(options.tags)
        .with_description(options.description)
        .with_duration(options.duration);
        record.id = id;

        self.create(&record).await?;
        Ok(record)
    }

    /// Atomically replace the record document on disk.
    async fn write_document(&self, record: &MediaRecord) -> StoreResult<()> {
        fs::create_dir_all(self.layout.metadata_dir()).await?;
        let path = self.record_path(&record.id);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(record)?;
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn store() -> (TempDir, MediaStore) {
        let dir = TempDir::new().unwrap();
        let layout = StorageLayout::new(dir.path());
        layout.ensure_dirs().await.unwrap();
        (dir, MediaStore::new(layout))
    }

    async fn put_file(store: &MediaStore, source: MediaSource, name: &str) -> MediaRecord {
        let path = store.layout.media_dir(source).join(name);
        fs::write(&path, b"fake video bytes").await.unwrap();
        let record = MediaRecord::new(
            source,
            name,
            path,
            store.layout.url_for(source, name),
            16,
        );
        store.create(&record).await.unwrap();
        record
    }

    #[tokio::test]
    async fn test_create_rejects_dangling_path() {
        let (_dir, store) = store().await;
        let record = MediaRecord::new(
            MediaSource::Edited,
            "ghost.mp4",
            store.layout.edited_dir().join("ghost.mp4"),
            "/uploads/videos/edited/ghost.mp4",
            0,
        );
        let err = store.create(&record).await.unwrap_err();
        assert!(matches!(err, StoreError::DanglingPath(_)));
        assert!(store.get(&record.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_get_roundtrip() {
        let (_dir, store) = store().await;
        let record = put_file(&store, MediaSource::Upload, "a.mp4").await;

        let fetched = store.get(&record.id).await.unwrap().unwrap();
        assert_eq!(fetched.filename, "a.mp4");
        assert_eq!(fetched.source, MediaSource::Upload);
    }

    #[tokio::test]
    async fn test_list_filters_by_source_and_tag() {
        let (_dir, store) = store().await;
        put_file(&store, MediaSource::Upload, "a.mp4").await;
        let mut edited = MediaRecord::new(
            MediaSource::Edited,
            "b.mp4",
            store.layout.edited_dir().join("b.mp4"),
            "/uploads/videos/edited/b.mp4",
            16,
        )
        .with_tags(vec!["transition".to_string(), "fade".to_string()]);
        fs::write(&edited.path, b"fake video bytes").await.unwrap();
        edited.id = MediaId::new("edited");
        store.create(&edited).await.unwrap();

        let all = store.list(&MediaFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let edited_only = store
            .list(&MediaFilter {
                source: Some(MediaSource::Edited),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(edited_only.len(), 1);
        assert_eq!(edited_only[0].filename, "b.mp4");

        let tagged = store
            .list(&MediaFilter {
                tag: Some("fade".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(tagged.len(), 1);
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let (_dir, store) = store().await;
        for i in 0..5 {
            put_file(&store, MediaSource::Upload, &format!("clip{}.mp4", i)).await;
        }

        let page = store
            .list(&MediaFilter {
                limit: Some(2),
                offset: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (_dir, store) = store().await;
        let record = put_file(&store, MediaSource::Upload, "a.mp4").await;

        let updated = store
            .update(
                &record.id,
                MediaUpdate {
                    description: Some("updated".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.description.as_deref(), Some("updated"));

        assert!(store.delete(&record.id).await.unwrap());
        assert!(store.get(&record.id).await.unwrap().is_none());
        assert!(!fs::try_exists(&record.path).await.unwrap());

        // Deleting again reports absence
        assert!(!store.delete(&record.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_save_file_copies_into_tree() {
        let (dir, store) = store().await;
        let src = dir.path().join("incoming.mp4");
        fs::write(&src, b"uploaded bytes").await.unwrap();

        let record = store
            .save_file(
                &src,
                MediaSource::Upload,
                SaveFileOptions {
                    tags: vec!["raw".to_string()],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(record.path.starts_with(store.layout.media_dir(MediaSource::Upload)));
        assert_eq!(record.size, 14);
        assert!(record.url.starts_with("/uploads/videos/upload/"));
        assert!(store.get(&record.id).await.unwrap().is_some());
    }
}
