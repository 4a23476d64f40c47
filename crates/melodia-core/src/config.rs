//! Configuration module
//!
//! Runtime settings for the HTTP server, the catalog database and the blob store.
//! Values come from the process environment (optionally seeded from a `.env` file).

use std::env;

use crate::storage_types::StorageBackend;

// Common constants
const SERVER_PORT: u16 = 8080;
const MAX_CONNECTIONS: u32 = 10;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const MAX_UPLOAD_SIZE_MB: usize = 100;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;
const DEFAULT_S3_REGION: &str = "us-east-1";

/// HTTP server settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub max_upload_size_bytes: usize,
    pub http_concurrency_limit: usize,
}

/// Catalog database settings
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
}

/// Blob store settings
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: String,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    pub local_storage_path: Option<String>,
}

#[derive(Clone, Debug)]
pub struct MelodiaConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<MelodiaConfig>);

impl Config {
    fn inner(&self) -> &MelodiaConfig {
        &self.0
    }

    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = MelodiaConfig::from_lookup(lookup)?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.inner().validate()
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_name(&self.inner().server.environment)
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.inner().server.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.inner().server.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.inner().server.environment
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.inner().server.max_upload_size_bytes
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.inner().server.http_concurrency_limit
    }

    pub fn database_url(&self) -> &str {
        &self.inner().catalog.database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.inner().catalog.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.inner().catalog.db_timeout_seconds
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.inner().storage.storage_backend
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.inner().storage.s3_bucket.as_deref()
    }

    pub fn s3_region(&self) -> &str {
        &self.inner().storage.s3_region
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.inner().storage.s3_endpoint.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.inner().storage.local_storage_path.as_deref()
    }
}

fn is_production_name(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

/// Non-empty value for `key`, trimmed.
fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl MelodiaConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = non_empty(&lookup, "ENVIRONMENT")
            .or_else(|| non_empty(&lookup, "APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins_str = non_empty(&lookup, "CORS_ORIGINS").unwrap_or_else(|| "*".to_string());
        if is_production_name(&environment) && cors_origins_str == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match non_empty(&lookup, "SERVER_PORT").or_else(|| non_empty(&lookup, "PORT")) {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("SERVER_PORT must be a valid port number"))?,
            None => SERVER_PORT,
        };

        let max_upload_size_mb = non_empty(&lookup, "MAX_UPLOAD_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_UPLOAD_SIZE_MB);
        if max_upload_size_mb == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }
        let max_upload_size_bytes = max_upload_size_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large"))?;

        let server = ServerConfig {
            server_port,
            cors_origins,
            environment,
            max_upload_size_bytes,
            http_concurrency_limit: non_empty(&lookup, "HTTP_CONCURRENCY_LIMIT")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT)
                .max(1),
        };

        let catalog = CatalogConfig {
            database_url: non_empty(&lookup, "DATABASE_URL")
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: non_empty(&lookup, "DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: non_empty(&lookup, "DB_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
        };

        let storage_backend = match non_empty(&lookup, "STORAGE_BACKEND") {
            Some(value) => value.parse::<StorageBackend>()?,
            None => StorageBackend::S3,
        };

        let storage = StorageConfig {
            storage_backend,
            s3_bucket: non_empty(&lookup, "S3_BUCKET"),
            s3_region: non_empty(&lookup, "S3_REGION")
                .or_else(|| non_empty(&lookup, "AWS_REGION"))
                .unwrap_or_else(|| DEFAULT_S3_REGION.to_string()),
            s3_endpoint: non_empty(&lookup, "S3_ENDPOINT"),
            local_storage_path: non_empty(&lookup, "LOCAL_STORAGE_PATH"),
        };

        let config = MelodiaConfig {
            server,
            catalog,
            storage,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let url = &self.catalog.database_url;
        if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.server.cors_origins.is_empty() {
            return Err(anyhow::anyhow!("CORS_ORIGINS must list at least one origin"));
        }

        match self.storage.storage_backend {
            StorageBackend::S3 => {
                if self.storage.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET must be set when using S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.storage.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
            }
        }

        Ok(())
    }
}
