use melodia_core::AppError;
use sqlx::error::ErrorKind;

/// Translate constraint violations into client errors; everything else stays a database error.
pub(crate) fn classify(err: sqlx::Error, entity: &str) -> AppError {
    let kind = err.as_database_error().map(|db_err| db_err.kind());
    match kind {
        Some(ErrorKind::UniqueViolation) => AppError::Conflict(format!("{} already exists", entity)),
        Some(ErrorKind::ForeignKeyViolation) => AppError::InvalidInput(format!(
            "{} references an artist or album that does not exist",
            entity
        )),
        Some(ErrorKind::CheckViolation) | Some(ErrorKind::NotNullViolation) => {
            AppError::InvalidInput(format!("{} has invalid field values", entity))
        }
        _ => AppError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_pass_through() {
        let err = classify(sqlx::Error::RowNotFound, "Song");
        assert!(matches!(err, AppError::Database(sqlx::Error::RowNotFound)));

        let err = classify(sqlx::Error::PoolTimedOut, "Artist");
        assert!(matches!(err, AppError::Database(_)));
    }
}
