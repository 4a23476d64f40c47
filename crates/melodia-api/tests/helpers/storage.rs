//! Storage wrapper with switchable faults, for exercising failure paths end to end.

use async_trait::async_trait;
use melodia_core::StorageBackend;
use melodia_storage::{ByteReader, ByteStream, LocalStorage, Storage, StorageError, StorageResult};
use std::sync::atomic::{AtomicBool, Ordering};

pub struct FlakyStorage {
    inner: LocalStorage,
    fail_upload: AtomicBool,
    fail_delete: AtomicBool,
}

impl FlakyStorage {
    pub fn new(inner: LocalStorage) -> Self {
        Self {
            inner,
            fail_upload: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }

    pub fn fail_uploads(&self, fail: bool) {
        self.fail_upload.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Storage for FlakyStorage {
    async fn upload_stream(
        &self,
        storage_key: &str,
        content_type: &str,
        content_length: Option<u64>,
        reader: ByteReader,
    ) -> StorageResult<u64> {
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(StorageError::UploadFailed("injected put failure".to_string()));
        }
        self.inner
            .upload_stream(storage_key, content_type, content_length, reader)
            .await
    }

    async fn download_stream(&self, storage_key: &str) -> StorageResult<ByteStream> {
        self.inner.download_stream(storage_key).await
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(StorageError::DeleteFailed("injected delete failure".to_string()));
        }
        self.inner.delete(storage_key).await
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        self.inner.exists(storage_key).await
    }

    fn backend_type(&self) -> StorageBackend {
        self.inner.backend_type()
    }
}
