//! Song API integration tests: upload, stream, update, delete and their failure paths.
//!
//! Run with: `cargo test -p melodia-api --test songs_test`
//! Requires Docker for testcontainers (Postgres).

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{api_path, create_album, create_artist, setup_test_app, song_form, upload_song};

#[tokio::test]
async fn test_upload_ten_bytes() {
    let app = setup_test_app().await;
    let client = app.client();

    let song = upload_song(client, song_form("Test", b"0123456789")).await;

    let id = song["id"].as_i64().expect("id");
    assert!(id > 0);
    assert_eq!(song["title"], "Test");
    assert_eq!(song["file_size"], 10);
    assert_eq!(song["content_type"], "audio/mpeg");
    assert!(song["artist_id"].is_null());
    assert!(song["album_id"].is_null());

    assert_eq!(std::fs::read(app.song_path(id)).unwrap(), b"0123456789");
    assert!(app.song_path(id).ends_with(format!("songs/{}/song.mp3", id)));
}

#[tokio::test]
async fn test_upload_then_stream_returns_same_bytes() {
    let app = setup_test_app().await;
    let client = app.client();
    let payload: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();

    let song = upload_song(client, song_form("Long Take", &payload)).await;
    let id = song["id"].as_i64().unwrap();

    let response = client.get(&api_path(&format!("/songs/{}/stream", id))).await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("content-type"), "audio/mpeg");
    assert_eq!(response.header("accept-ranges"), "bytes");
    assert_eq!(response.as_bytes().to_vec(), payload);
}

#[tokio::test]
async fn test_upload_fields_after_file_and_metadata() {
    let app = setup_test_app().await;
    let client = app.client();
    let artist_id = create_artist(client, "Alice Coltrane").await;
    let album_id = create_album(client, "Journey in Satchidananda", artist_id, Some(1971)).await;

    let part = Part::bytes(bytes::Bytes::from_static(b"OggS...."))
        .file_name("track.ogg")
        .mime_type("audio/ogg");
    let form = MultipartForm::new()
        .add_part("file", part)
        .add_text("title", "Shiva-Loka")
        .add_text("artist_id", artist_id.to_string())
        .add_text("album_id", album_id.to_string())
        .add_text("track_number", "2")
        .add_text("duration", "not-a-number");

    let song = upload_song(client, form).await;

    assert_eq!(song["artist_id"], artist_id);
    assert_eq!(song["album_id"], album_id);
    assert_eq!(song["track_number"], 2);
    assert_eq!(song["duration"], 0);
    assert_eq!(song["content_type"], "audio/ogg");
    assert_eq!(song["artist_name"], "Alice Coltrane");
    assert_eq!(song["album_title"], "Journey in Satchidananda");
}

#[tokio::test]
async fn test_upload_zero_bytes() {
    let app = setup_test_app().await;
    let client = app.client();

    let song = upload_song(client, song_form("Silence", b"")).await;
    let id = song["id"].as_i64().unwrap();

    assert_eq!(song["file_size"], 0);
    let response = client.get(&api_path(&format!("/songs/{}/stream", id))).await;
    assert_eq!(response.status_code(), 200);
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_upload_without_title_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let part = Part::bytes(bytes::Bytes::from_static(b"abc")).mime_type("audio/mpeg");
    let response = client
        .post(&api_path("/songs/upload"))
        .multipart(MultipartForm::new().add_part("file", part))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<serde_json::Value>()["code"], "INVALID_INPUT");
    assert_eq!(app.song_count().await, 0);
}

#[tokio::test]
async fn test_upload_without_file_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post(&api_path("/songs/upload"))
        .multipart(MultipartForm::new().add_text("title", "No Audio"))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(app.song_count().await, 0);
}

#[tokio::test]
async fn test_upload_with_unknown_artist_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let form = song_form("Ghost", b"abc").add_text("artist_id", "424242");
    let response = client.post(&api_path("/songs/upload")).multipart(form).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(app.song_count().await, 0);
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();
    let payload = vec![0u8; 2 * 1024 * 1024];

    let response = client
        .post(&api_path("/songs/upload"))
        .multipart(song_form("Too Long", &payload))
        .await;

    assert_eq!(response.status_code(), 413);
    assert_eq!(app.song_count().await, 0);
}

#[tokio::test]
async fn test_upload_storage_failure_leaves_no_row() {
    let app = setup_test_app().await;
    let client = app.client();
    app.storage.fail_uploads(true);

    let response = client
        .post(&api_path("/songs/upload"))
        .multipart(song_form("Doomed", b"0123456789"))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.json::<serde_json::Value>()["code"], "STORAGE_ERROR");
    assert_eq!(app.song_count().await, 0);
}

#[tokio::test]
async fn test_get_and_list_songs() {
    let app = setup_test_app().await;
    let client = app.client();
    let artist_id = create_artist(client, "Can").await;
    let album_id = create_album(client, "Tago Mago", artist_id, Some(1971)).await;

    let form = |title: &str, track: &str| {
        song_form(title, b"abc")
            .add_text("artist_id", artist_id.to_string())
            .add_text("album_id", album_id.to_string())
            .add_text("track_number", track.to_string())
    };
    upload_song(client, form("Halleluhwah", "3")).await;
    upload_song(client, form("Paperhouse", "1")).await;
    let loose = upload_song(client, song_form("Loose", b"abc")).await;

    let all: Vec<serde_json::Value> = client.get(&api_path("/songs")).await.json();
    assert_eq!(all.len(), 3);

    let by_album: Vec<serde_json::Value> = client
        .get(&api_path("/songs"))
        .add_query_param("album_id", album_id)
        .await
        .json();
    let titles: Vec<&str> = by_album.iter().map(|s| s["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Paperhouse", "Halleluhwah"]);

    let by_artist: Vec<serde_json::Value> = client
        .get(&api_path("/songs"))
        .add_query_param("artist_id", artist_id)
        .await
        .json();
    assert_eq!(by_artist.len(), 2);

    let id = loose["id"].as_i64().unwrap();
    let response = client.get(&api_path(&format!("/songs/{}", id))).await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<serde_json::Value>()["title"], "Loose");
}

#[tokio::test]
async fn test_get_missing_and_malformed_song() {
    let app = setup_test_app().await;
    let client = app.client();

    let missing = client.get(&api_path("/songs/999999")).await;
    assert_eq!(missing.status_code(), 404);

    let malformed = client.get(&api_path("/songs/not-a-number")).await;
    assert_eq!(malformed.status_code(), 400);

    let zero = client.get(&api_path("/songs/0")).await;
    assert_eq!(zero.status_code(), 400);
}

#[tokio::test]
async fn test_update_song_metadata() {
    let app = setup_test_app().await;
    let client = app.client();
    let artist_id = create_artist(client, "Broadcast").await;
    let song = upload_song(client, song_form("Untitled", b"abc")).await;
    let id = song["id"].as_i64().unwrap();

    let response = client
        .put(&api_path(&format!("/songs/{}", id)))
        .json(&serde_json::json!({ "title": "Tears in the Typing Pool", "artist_id": artist_id }))
        .await;

    assert_eq!(response.status_code(), 200);
    let updated: serde_json::Value = response.json();
    assert_eq!(updated["title"], "Tears in the Typing Pool");
    assert_eq!(updated["artist_name"], "Broadcast");
    assert_eq!(updated["file_size"], 3);

    let missing = client
        .put(&api_path("/songs/999999"))
        .json(&serde_json::json!({ "title": "Nobody" }))
        .await;
    assert_eq!(missing.status_code(), 404);

    let blank = client
        .put(&api_path(&format!("/songs/{}", id)))
        .json(&serde_json::json!({ "title": "" }))
        .await;
    assert_eq!(blank.status_code(), 400);
}

#[tokio::test]
async fn test_delete_song_removes_row_and_audio() {
    let app = setup_test_app().await;
    let client = app.client();
    let song = upload_song(client, song_form("Ephemeral", b"abc")).await;
    let id = song["id"].as_i64().unwrap();

    let response = client.delete(&api_path(&format!("/songs/{}", id))).await;

    assert_eq!(response.status_code(), 204);
    assert!(!app.song_row_exists(id).await);
    assert!(!app.song_path(id).exists());

    let stream = client.get(&api_path(&format!("/songs/{}/stream", id))).await;
    assert_eq!(stream.status_code(), 404);
}

#[tokio::test]
async fn test_delete_nonexistent_song() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.delete(&api_path("/songs/999999")).await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_delete_storage_failure_keeps_row() {
    let app = setup_test_app().await;
    let client = app.client();
    let song = upload_song(client, song_form("Survivor", b"abc")).await;
    let id = song["id"].as_i64().unwrap();
    app.storage.fail_deletes(true);

    let response = client.delete(&api_path(&format!("/songs/{}", id))).await;

    assert_eq!(response.status_code(), 500);
    assert!(app.song_row_exists(id).await);
    assert!(app.song_path(id).exists());

    app.storage.fail_deletes(false);
    let retry = client.delete(&api_path(&format!("/songs/{}", id))).await;
    assert_eq!(retry.status_code(), 204);
    assert!(!app.song_row_exists(id).await);
}

#[tokio::test]
async fn test_stream_row_without_audio_is_not_found() {
    let app = setup_test_app().await;
    let client = app.client();
    let song = upload_song(client, song_form("Vanishing", b"abc")).await;
    let id = song["id"].as_i64().unwrap();
    std::fs::remove_file(app.song_path(id)).unwrap();

    let response = client.get(&api_path(&format!("/songs/{}/stream", id))).await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .get(&api_path("/songs"))
        .add_header("X-Request-ID", "trace-me")
        .await;
    assert_eq!(response.header("x-request-id"), "trace-me");

    let generated = client.get(&api_path("/songs")).await;
    assert!(!generated.header("x-request-id").is_empty());
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "healthy");
    assert_eq!(body["storage"], "healthy");
}
