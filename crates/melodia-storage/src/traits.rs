//! Storage abstraction trait
//!
//! Every blob backend implements [`Storage`]. Operations are key-addressed and
//! independent of one another; no call touches any key other than its own.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Payload source handed to [`Storage::upload_stream`].
pub type ByteReader = Pin<Box<dyn AsyncRead + Send + Unpin>>;

/// Object body returned by [`Storage::download_stream`].
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

/// Storage abstraction trait
///
/// The catalog layer only ever addresses objects through keys it derived itself,
/// so backends make no assumptions about key layout beyond path safety.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Stream `reader` to `storage_key` until EOF, tagging the object with `content_type`.
    ///
    /// Returns the number of bytes written. `content_length` is a hint only.
    /// A failed upload must not leave a readable object behind under `storage_key`.
    async fn upload_stream(
        &self,
        storage_key: &str,
        content_type: &str,
        content_length: Option<u64>,
        reader: ByteReader,
    ) -> StorageResult<u64>;

    /// Open an object as a stream of `Bytes` chunks.
    ///
    /// Returns [`StorageError::NotFound`] when no object exists under the key.
    async fn download_stream(&self, storage_key: &str) -> StorageResult<ByteStream>;

    /// Delete an object. Deleting a missing key succeeds.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if an object exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
