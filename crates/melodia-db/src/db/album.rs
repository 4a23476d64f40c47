use super::constraint::classify;
use melodia_core::{models::Album, AppError};
use sqlx::{PgPool, Postgres};

const ALBUM_SELECT: &str = r#"
    SELECT al.id, al.title, al.artist_id, al.year, al.cover_art, al.created_at, al.updated_at,
           ar.name AS artist_name
    FROM albums al
    LEFT JOIN artists ar ON ar.id = al.artist_id
"#;

/// Repository for managing albums
#[derive(Clone)]
pub struct AlbumRepository {
    pool: PgPool,
}

impl AlbumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self), fields(db.table = "albums", db.operation = "insert"))]
    pub async fn create_album(
        &self,
        title: &str,
        artist_id: i64,
        year: Option<i32>,
        cover_art: Option<&str>,
    ) -> Result<Album, AppError> {
        let album = sqlx::query_as::<Postgres, Album>(
            r#"
            WITH inserted AS (
                INSERT INTO albums (title, artist_id, year, cover_art)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT al.id, al.title, al.artist_id, al.year, al.cover_art, al.created_at, al.updated_at,
                   ar.name AS artist_name
            FROM inserted al
            LEFT JOIN artists ar ON ar.id = al.artist_id
            "#,
        )
        .bind(title)
        .bind(artist_id)
        .bind(year)
        .bind(cover_art)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "Album"))?;

        Ok(album)
    }

    #[tracing::instrument(skip(self), fields(db.table = "albums", db.operation = "select", db.record_id = %id))]
    pub async fn get_album(&self, id: i64) -> Result<Option<Album>, AppError> {
        let query = format!("{} WHERE al.id = $1", ALBUM_SELECT);
        let album = sqlx::query_as::<Postgres, Album>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(album)
    }

    /// Albums of one artist (newest release first), or every album (newest entry first)
    #[tracing::instrument(skip(self), fields(db.table = "albums", db.operation = "select"))]
    pub async fn list_albums(&self, artist_id: Option<i64>) -> Result<Vec<Album>, AppError> {
        let albums = match artist_id {
            Some(artist_id) => {
                let query = format!(
                    "{} WHERE al.artist_id = $1 ORDER BY al.year DESC NULLS LAST, al.title ASC",
                    ALBUM_SELECT
                );
                sqlx::query_as::<Postgres, Album>(&query)
                    .bind(artist_id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("{} ORDER BY al.created_at DESC, al.id DESC", ALBUM_SELECT);
                sqlx::query_as::<Postgres, Album>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(albums)
    }

    #[tracing::instrument(skip(self), fields(db.table = "albums", db.operation = "update", db.record_id = %id))]
    pub async fn update_album(
        &self,
        id: i64,
        title: &str,
        artist_id: i64,
        year: Option<i32>,
        cover_art: Option<&str>,
    ) -> Result<Option<Album>, AppError> {
        sqlx::query_as::<Postgres, Album>(
            r#"
            WITH updated AS (
                UPDATE albums
                SET title = $1, artist_id = $2, year = $3, cover_art = $4, updated_at = NOW()
                WHERE id = $5
                RETURNING *
            )
            SELECT al.id, al.title, al.artist_id, al.year, al.cover_art, al.created_at, al.updated_at,
                   ar.name AS artist_name
            FROM updated al
            LEFT JOIN artists ar ON ar.id = al.artist_id
            "#,
        )
        .bind(title)
        .bind(artist_id)
        .bind(year)
        .bind(cover_art)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(e, "Album"))
    }

    #[tracing::instrument(skip(self), fields(db.table = "albums", db.operation = "delete", db.record_id = %id))]
    pub async fn delete_album(&self, id: i64) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
