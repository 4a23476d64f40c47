use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Album released by an artist
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Joined from `artists.name`
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
}

/// Request body for creating or replacing an album
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct AlbumRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Album title must be between 1 and 255 characters"
    ))]
    pub title: String,
    #[validate(range(min = 1, message = "artist_id must be a positive identifier"))]
    pub artist_id: i64,
    #[serde(default)]
    #[validate(range(min = 0, max = 9999, message = "year must be between 0 and 9999"))]
    pub year: Option<i32>,
    #[serde(default)]
    #[validate(length(max = 2048, message = "cover_art must be at most 2048 characters"))]
    pub cover_art: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AlbumListQuery {
    /// Only return albums by this artist
    pub artist_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_request_requires_positive_artist() {
        let req: AlbumRequest =
            serde_json::from_str(r#"{"title": "Pastel Blues", "artist_id": 0}"#).unwrap();
        assert!(req.validate().is_err());

        let req: AlbumRequest =
            serde_json::from_str(r#"{"title": "Pastel Blues", "artist_id": 3, "year": 1965}"#)
                .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_album_request_missing_artist_fails_to_parse() {
        let parsed = serde_json::from_str::<AlbumRequest>(r#"{"title": "Orphan"}"#);
        assert!(parsed.is_err());
    }
}
