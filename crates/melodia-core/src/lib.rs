//! Melodia Core Library
//!
//! Domain models, error types, configuration and storage key derivation shared by
//! every Melodia crate.

pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{CatalogConfig, Config, MelodiaConfig, ServerConfig, StorageConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use keys::song_storage_key;
pub use storage_types::StorageBackend;
