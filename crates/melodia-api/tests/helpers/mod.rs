//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p melodia-api`. Requires Docker for
//! testcontainers (Postgres).

#![allow(dead_code)]

pub mod storage;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use melodia_api::constants;
use melodia_api::setup::{database, routes};
use melodia_api::state::AppState;
use melodia_core::Config;
use melodia_storage::{LocalStorage, Storage};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::testcontainers::ContainerAsync;

use storage::FlakyStorage;

/// API path prefix for tests (e.g. `/api/v1`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Test application: server, pool, fault switches and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub pool: sqlx::PgPool,
    pub storage: Arc<FlakyStorage>,
    pub storage_dir: TempDir,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }

    /// On-disk location of a song's audio object.
    pub fn song_path(&self, song_id: i64) -> std::path::PathBuf {
        self.storage_dir
            .path()
            .join(melodia_core::song_storage_key(song_id))
    }

    pub async fn song_row_exists(&self, song_id: i64) -> bool {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM songs WHERE id = $1)")
            .bind(song_id)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to query songs")
    }

    pub async fn song_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM songs")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count songs")
    }
}

fn create_test_config(database_url: &str, storage_path: &str) -> Config {
    let vars = [
        ("DATABASE_URL", database_url.to_string()),
        ("STORAGE_BACKEND", "local".to_string()),
        ("LOCAL_STORAGE_PATH", storage_path.to_string()),
        ("MAX_UPLOAD_SIZE_MB", "1".to_string()),
    ];
    Config::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    })
    .expect("Failed to build test config")
}

/// Setup test app with an isolated Postgres and local storage in a tempdir.
pub async fn setup_test_app() -> TestApp {
    let container = Postgres::default()
        .start()
        .await
        .expect("Failed to start Postgres container");
    let host = container.get_host().await.expect("Failed to get container host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get Postgres port");

    let connection_string = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&connection_string)
        .await
        .expect("Failed to connect to test database");

    database::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let storage_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let local = LocalStorage::new(storage_dir.path())
        .await
        .expect("Failed to create local storage");
    let storage = Arc::new(FlakyStorage::new(local));

    let config = create_test_config(
        &connection_string,
        &storage_dir.path().to_string_lossy(),
    );

    let dyn_storage: Arc<dyn Storage> = storage.clone();
    let state = Arc::new(AppState::new(&config, pool.clone(), dyn_storage));
    let router = routes::setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        pool,
        storage,
        storage_dir,
        _container: container,
    }
}

/// Multipart upload form with a title and an `audio/mpeg` file part.
pub fn song_form(title: &str, payload: &[u8]) -> MultipartForm {
    let part = Part::bytes(bytes::Bytes::copy_from_slice(payload))
        .file_name("track.mp3")
        .mime_type("audio/mpeg");
    MultipartForm::new()
        .add_text("title", title.to_string())
        .add_part("file", part)
}

/// Create an artist through the API and return its id.
pub async fn create_artist(client: &TestServer, name: &str) -> i64 {
    let response = client
        .post(&api_path("/artists"))
        .json(&serde_json::json!({ "name": name }))
        .await;
    assert_eq!(response.status_code(), 201);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("Expected numeric artist id")
}

/// Create an album through the API and return its id.
pub async fn create_album(client: &TestServer, title: &str, artist_id: i64, year: Option<i32>) -> i64 {
    let response = client
        .post(&api_path("/albums"))
        .json(&serde_json::json!({ "title": title, "artist_id": artist_id, "year": year }))
        .await;
    assert_eq!(response.status_code(), 201);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("Expected numeric album id")
}

/// Upload a song and return the response body.
pub async fn upload_song(client: &TestServer, form: MultipartForm) -> serde_json::Value {
    let response = client.post(&api_path("/songs/upload")).multipart(form).await;
    assert_eq!(response.status_code(), 201, "upload failed: {}", response.text());
    response.json::<serde_json::Value>()
}
