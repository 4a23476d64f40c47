//! Storage setup and initialization

use anyhow::{Context, Result};
use melodia_core::Config;
use melodia_storage::{create_storage, Storage};
use std::sync::Arc;

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(backend = %config.storage_backend(), "Initializing storage...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;

    match config.s3_bucket() {
        Some(bucket) if storage.backend_type() == melodia_core::StorageBackend::S3 => {
            tracing::info!(
                bucket,
                region = config.s3_region(),
                endpoint = ?config.s3_endpoint(),
                "S3 storage ready"
            );
        }
        _ => {
            tracing::info!(path = ?config.local_storage_path(), "Local storage ready");
        }
    }

    Ok(storage)
}
