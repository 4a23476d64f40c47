use super::constraint::classify;
use melodia_core::{models::Artist, AppError};
use sqlx::{PgPool, Postgres};

const ARTIST_COLUMNS: &str = "id, name, bio, created_at, updated_at";

/// Repository for managing artists
#[derive(Clone)]
pub struct ArtistRepository {
    pool: PgPool,
}

impl ArtistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(skip(self), fields(db.table = "artists", db.operation = "insert"))]
    pub async fn create_artist(&self, name: &str, bio: Option<&str>) -> Result<Artist, AppError> {
        let query = format!(
            "INSERT INTO artists (name, bio) VALUES ($1, $2) RETURNING {}",
            ARTIST_COLUMNS
        );
        sqlx::query_as::<Postgres, Artist>(&query)
            .bind(name)
            .bind(bio)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| classify(e, "Artist"))
    }

    #[tracing::instrument(skip(self), fields(db.table = "artists", db.operation = "select", db.record_id = %id))]
    pub async fn get_artist(&self, id: i64) -> Result<Option<Artist>, AppError> {
        let query = format!("SELECT {} FROM artists WHERE id = $1", ARTIST_COLUMNS);
        let artist = sqlx::query_as::<Postgres, Artist>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(artist)
    }

    /// All artists, alphabetically
    #[tracing::instrument(skip(self), fields(db.table = "artists", db.operation = "select"))]
    pub async fn list_artists(&self) -> Result<Vec<Artist>, AppError> {
        let query = format!("SELECT {} FROM artists ORDER BY name ASC", ARTIST_COLUMNS);
        let artists = sqlx::query_as::<Postgres, Artist>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(artists)
    }

    /// Replace name and bio. `None` when the artist does not exist.
    #[tracing::instrument(skip(self), fields(db.table = "artists", db.operation = "update", db.record_id = %id))]
    pub async fn update_artist(
        &self,
        id: i64,
        name: &str,
        bio: Option<&str>,
    ) -> Result<Option<Artist>, AppError> {
        let query = format!(
            "UPDATE artists SET name = $1, bio = $2, updated_at = NOW() WHERE id = $3 RETURNING {}",
            ARTIST_COLUMNS
        );
        sqlx::query_as::<Postgres, Artist>(&query)
            .bind(name)
            .bind(bio)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, "Artist"))
    }

    /// Albums cascade with the artist; songs keep their row with `artist_id` cleared.
    #[tracing::instrument(skip(self), fields(db.table = "artists", db.operation = "delete", db.record_id = %id))]
    pub async fn delete_artist(&self, id: i64) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
