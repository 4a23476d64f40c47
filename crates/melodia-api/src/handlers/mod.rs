pub mod albums;
pub mod artists;
pub mod song_stream;
pub mod song_upload;
pub mod songs;

use melodia_core::AppError;

/// Parse a path identifier. Catalog ids are store-assigned positive integers.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<i64, AppError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidInput(format!("Invalid {} id: {}", entity, raw))),
    }
}
