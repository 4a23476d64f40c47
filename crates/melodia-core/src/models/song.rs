use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Content type recorded when an upload does not declare one.
pub const DEFAULT_SONG_CONTENT_TYPE: &str = "audio/mpeg";

/// Catalog entry for an uploaded song.
///
/// The audio payload lives in the blob store under
/// [`song_storage_key(id)`](crate::keys::song_storage_key).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist_id: Option<i64>,
    pub album_id: Option<i64>,
    pub track_number: Option<i32>,
    /// Duration in seconds
    pub duration: i32,
    /// Payload length in bytes
    pub file_size: i64,
    pub content_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Joined from `artists.name`
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    /// Joined from `albums.title`
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_title: Option<String>,
}

impl Song {
    pub fn storage_key(&self) -> String {
        crate::keys::song_storage_key(self.id)
    }
}

/// Metadata supplied alongside an upload payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct NewSongUpload {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Song title must be between 1 and 255 characters"
    ))]
    pub title: String,
    pub artist_id: Option<i64>,
    pub album_id: Option<i64>,
    #[validate(range(min = 1, message = "track_number must be positive"))]
    pub track_number: Option<i32>,
    #[validate(range(min = 0, message = "duration must not be negative"))]
    pub duration: Option<i32>,
}

/// Row values for a catalog insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSong {
    pub title: String,
    pub artist_id: Option<i64>,
    pub album_id: Option<i64>,
    pub track_number: Option<i32>,
    pub duration: i32,
    pub file_size: i64,
    pub content_type: String,
}

impl NewSong {
    /// Combine upload metadata with payload facts. Absent duration defaults to zero,
    /// a blank content type to [`DEFAULT_SONG_CONTENT_TYPE`].
    pub fn from_upload(upload: NewSongUpload, file_size: u64, content_type: &str) -> Self {
        let content_type = content_type.trim();
        NewSong {
            title: upload.title,
            artist_id: upload.artist_id,
            album_id: upload.album_id,
            track_number: upload.track_number,
            duration: upload.duration.unwrap_or(0),
            file_size: i64::try_from(file_size).unwrap_or(i64::MAX),
            content_type: if content_type.is_empty() {
                DEFAULT_SONG_CONTENT_TYPE.to_string()
            } else {
                content_type.to_string()
            },
        }
    }
}

/// Request body for replacing a song's descriptive metadata
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct UpdateSongRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Song title must be between 1 and 255 characters"
    ))]
    pub title: String,
    #[serde(default)]
    pub artist_id: Option<i64>,
    #[serde(default)]
    pub album_id: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 1, message = "track_number must be positive"))]
    pub track_number: Option<i32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SongListQuery {
    /// Only return songs by this artist
    pub artist_id: Option<i64>,
    /// Only return songs on this album, in track order
    pub album_id: Option<i64>,
}

/// Listing filter for songs. The artist filter wins when both ids are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongFilter {
    All,
    ByArtist(i64),
    ByAlbum(i64),
}

impl From<&SongListQuery> for SongFilter {
    fn from(query: &SongListQuery) -> Self {
        match (query.artist_id, query.album_id) {
            (Some(artist_id), _) => SongFilter::ByArtist(artist_id),
            (None, Some(album_id)) => SongFilter::ByAlbum(album_id),
            (None, None) => SongFilter::All,
        }
    }
}
