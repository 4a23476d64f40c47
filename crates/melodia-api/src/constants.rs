//! API constants

/// Versioned prefix for every catalog route
pub const API_PREFIX: &str = "/api/v1";

/// Multipart field carrying the audio payload
pub const UPLOAD_FILE_FIELD: &str = "file";
