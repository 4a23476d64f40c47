//! Melodia Storage Library
//!
//! Blob store abstraction for song payloads, with S3 (object_store) and local
//! filesystem backends.
//!
//! # Storage key format
//!
//! Keys are produced by `melodia_core::song_storage_key` and look like
//! `songs/{id}/song.mp3`. Backends treat keys as opaque `/`-separated paths and
//! reject keys containing `..` or a leading `/`.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use melodia_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{ByteReader, ByteStream, Storage, StorageError, StorageResult};
