//! Startup configuration checks beyond what parsing already enforces.

use anyhow::Result;
use melodia_core::Config;

pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
    }

    if config.db_max_connections() == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds() == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    if config.max_upload_size_bytes() == 0 {
        return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB cannot be 0"));
    }

    Ok(())
}
