use async_trait::async_trait;
use melodia_core::models::{NewSong, Song};
use melodia_core::AppError;

/// The subset of song persistence the upload/delete/stream coordinators need.
///
/// Implemented by [`SongRepository`](super::SongRepository); tests substitute
/// in-memory doubles.
#[async_trait]
pub trait SongCatalog: Send + Sync {
    /// Insert a row and return it with its store-assigned id.
    async fn insert_song(&self, song: &NewSong) -> Result<Song, AppError>;

    async fn get_song(&self, id: i64) -> Result<Option<Song>, AppError>;

    /// Returns `false` when no row matched.
    async fn delete_song(&self, id: i64) -> Result<bool, AppError>;
}
