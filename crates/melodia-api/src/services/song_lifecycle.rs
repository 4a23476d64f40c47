//! Song lifecycle: keeps a catalog row and its audio object in step.
//!
//! Rows are created before objects (the row id names the object) and objects are
//! removed before rows. Every failure path leaves at worst a row without an object,
//! never an object without a row.

use crate::error::storage_error_to_app;
use melodia_core::models::{NewSong, NewSongUpload, Song};
use melodia_core::{song_storage_key, AppError};
use melodia_db::SongCatalog;
use melodia_storage::{ByteReader, ByteStream, Storage, StorageError};
use std::sync::Arc;
use validator::Validate;

/// Open object body plus the catalog facts needed to serve it.
pub struct SongStream {
    pub content_type: String,
    pub file_size: i64,
    pub stream: ByteStream,
}

/// Coordinates the catalog and blob store for upload, stream and delete.
#[derive(Clone)]
pub struct SongLifecycleService {
    catalog: Arc<dyn SongCatalog>,
    storage: Arc<dyn Storage>,
}

impl SongLifecycleService {
    pub fn new(catalog: Arc<dyn SongCatalog>, storage: Arc<dyn Storage>) -> Self {
        Self { catalog, storage }
    }

    /// Insert the row, then stream the payload to the object derived from its id.
    ///
    /// When the store rejects the payload the row is removed again. That removal is
    /// a single attempt; if it fails too, the row is left behind and logged.
    #[tracing::instrument(skip(self, upload, reader), fields(song.title = %upload.title, song.id = tracing::field::Empty))]
    pub async fn upload(
        &self,
        upload: NewSongUpload,
        reader: ByteReader,
        declared_size: u64,
        content_type: &str,
    ) -> Result<Song, AppError> {
        upload.validate()?;

        let new_song = NewSong::from_upload(upload, declared_size, content_type);
        let song = self.catalog.insert_song(&new_song).await?;
        tracing::Span::current().record("song.id", song.id);

        let storage_key = song_storage_key(song.id);
        match self
            .storage
            .upload_stream(&storage_key, &song.content_type, Some(declared_size), reader)
            .await
        {
            Ok(written) => {
                if written != declared_size {
                    tracing::warn!(
                        song_id = song.id,
                        declared_size,
                        written,
                        "Stored payload length differs from declared size"
                    );
                }
                tracing::info!(
                    song_id = song.id,
                    storage_key = %storage_key,
                    file_size = written,
                    "Song uploaded"
                );
                Ok(song)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    song_id = song.id,
                    storage_key = %storage_key,
                    "Blob upload failed, removing catalog row"
                );
                self.discard_row(song.id).await;
                Err(storage_error_to_app(e))
            }
        }
    }

    async fn discard_row(&self, song_id: i64) {
        match self.catalog.delete_song(song_id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(song_id, "Catalog row vanished before it could be removed");
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    song_id,
                    "Failed to remove catalog row after blob upload failure; row has no backing object"
                );
            }
        }
    }

    /// Open the stored object for a song.
    #[tracing::instrument(skip(self))]
    pub async fn stream(&self, id: i64) -> Result<SongStream, AppError> {
        let song = self
            .catalog
            .get_song(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Song not found".to_string()))?;

        let storage_key = song.storage_key();
        let stream = self
            .storage
            .download_stream(&storage_key)
            .await
            .map_err(|e| match e {
                StorageError::NotFound(_) => {
                    tracing::warn!(song_id = id, storage_key = %storage_key, "Catalog row has no stored object");
                    AppError::NotFound("Song audio not found".to_string())
                }
                other => storage_error_to_app(other),
            })?;

        Ok(SongStream {
            content_type: song.content_type,
            file_size: song.file_size,
            stream,
        })
    }

    /// Remove the object, then the row. The row stays when the object delete fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.catalog.get_song(id).await?.is_none() {
            return Err(AppError::NotFound("Song not found".to_string()));
        }

        let storage_key = song_storage_key(id);
        if let Err(e) = self.storage.delete(&storage_key).await {
            tracing::error!(
                error = %e,
                song_id = id,
                storage_key = %storage_key,
                "Blob delete failed, keeping catalog row"
            );
            return Err(storage_error_to_app(e));
        }
        tracing::debug!(song_id = id, storage_key = %storage_key, "Blob deleted");

        if !self.catalog.delete_song(id).await? {
            tracing::debug!(song_id = id, "Catalog row already removed by a concurrent delete");
        }

        tracing::info!(song_id = id, storage_key = %storage_key, "Song deleted");
        Ok(())
    }
}
