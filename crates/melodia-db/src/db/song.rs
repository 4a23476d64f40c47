use super::catalog::SongCatalog;
use super::constraint::classify;
use async_trait::async_trait;
use melodia_core::{
    models::{NewSong, Song, SongFilter, UpdateSongRequest},
    AppError,
};
use sqlx::{PgPool, Postgres};

/// Column list shared by every song read. `s` may be the table or a CTE.
const SONG_PROJECTION: &str = r#"
    SELECT s.id, s.title, s.artist_id, s.album_id, s.track_number, s.duration,
           s.file_size, s.content_type, s.created_at, s.updated_at,
           ar.name AS artist_name, al.title AS album_title
"#;

const SONG_JOINS: &str = r#"
    LEFT JOIN artists ar ON ar.id = s.artist_id
    LEFT JOIN albums al ON al.id = s.album_id
"#;

/// Repository for managing song catalog rows
#[derive(Clone)]
pub struct SongRepository {
    pool: PgPool,
}

impl SongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self, song), fields(db.table = "songs", db.operation = "insert", song.title = %song.title))]
    pub async fn insert(&self, song: &NewSong) -> Result<Song, AppError> {
        let query = format!(
            r#"
            WITH s AS (
                INSERT INTO songs (title, artist_id, album_id, track_number, duration, file_size, content_type)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
            )
            {SONG_PROJECTION}
            FROM s
            {SONG_JOINS}
            "#
        );

        let inserted = sqlx::query_as::<Postgres, Song>(&query)
            .bind(&song.title)
            .bind(song.artist_id)
            .bind(song.album_id)
            .bind(song.track_number)
            .bind(song.duration)
            .bind(song.file_size)
            .bind(&song.content_type)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(e, "Song"))?;

        tracing::debug!(song_id = inserted.id, "Song row inserted");
        Ok(inserted)
    }

    #[tracing::instrument(skip(self), fields(db.table = "songs", db.operation = "select", db.record_id = %id))]
    pub async fn get(&self, id: i64) -> Result<Option<Song>, AppError> {
        let query = format!("{SONG_PROJECTION} FROM songs s {SONG_JOINS} WHERE s.id = $1");
        let song = sqlx::query_as::<Postgres, Song>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(song)
    }

    #[tracing::instrument(skip(self), fields(db.table = "songs", db.operation = "select"))]
    pub async fn list(&self, filter: SongFilter) -> Result<Vec<Song>, AppError> {
        let base = format!("{SONG_PROJECTION} FROM songs s {SONG_JOINS}");

        let songs = match filter {
            SongFilter::All => {
                let query = format!("{base} ORDER BY s.created_at DESC, s.id DESC");
                sqlx::query_as::<Postgres, Song>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
            SongFilter::ByArtist(artist_id) => {
                let query =
                    format!("{base} WHERE s.artist_id = $1 ORDER BY s.created_at DESC, s.id DESC");
                sqlx::query_as::<Postgres, Song>(&query)
                    .bind(artist_id)
                    .fetch_all(&self.pool)
                    .await?
            }
            SongFilter::ByAlbum(album_id) => {
                let query = format!(
                    "{base} WHERE s.album_id = $1 \
                     ORDER BY s.track_number ASC NULLS LAST, s.created_at DESC, s.id DESC"
                );
                sqlx::query_as::<Postgres, Song>(&query)
                    .bind(album_id)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(songs)
    }

    /// Replace descriptive metadata. Payload facts (`file_size`, `content_type`) are untouched.
    #[tracing::instrument(skip(self, update), fields(db.table = "songs", db.operation = "update", db.record_id = %id))]
    pub async fn update(&self, id: i64, update: &UpdateSongRequest) -> Result<Option<Song>, AppError> {
        let query = format!(
            r#"
            WITH s AS (
                UPDATE songs
                SET title = $1, artist_id = $2, album_id = $3, track_number = $4, updated_at = NOW()
                WHERE id = $5
                RETURNING *
            )
            {SONG_PROJECTION}
            FROM s
            {SONG_JOINS}
            "#
        );

        sqlx::query_as::<Postgres, Song>(&query)
            .bind(&update.title)
            .bind(update.artist_id)
            .bind(update.album_id)
            .bind(update.track_number)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, "Song"))
    }

    #[tracing::instrument(skip(self), fields(db.table = "songs", db.operation = "delete", db.record_id = %id))]
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}

#[async_trait]
impl SongCatalog for SongRepository {
    async fn insert_song(&self, song: &NewSong) -> Result<Song, AppError> {
        self.insert(song).await
    }

    async fn get_song(&self, id: i64) -> Result<Option<Song>, AppError> {
        self.get(id).await
    }

    async fn delete_song(&self, id: i64) -> Result<bool, AppError> {
        self.delete(id).await
    }
}
