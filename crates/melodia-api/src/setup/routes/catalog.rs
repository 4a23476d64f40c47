//! Catalog route groups (artists, albums, songs).

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn artist_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/artists", API_PREFIX),
            get(handlers::artists::list_artists).post(handlers::artists::create_artist),
        )
        .route(
            &format!("{}/artists/{{id}}", API_PREFIX),
            get(handlers::artists::get_artist)
                .put(handlers::artists::update_artist)
                .delete(handlers::artists::delete_artist),
        )
}

pub fn album_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/albums", API_PREFIX),
            get(handlers::albums::list_albums).post(handlers::albums::create_album),
        )
        .route(
            &format!("{}/albums/{{id}}", API_PREFIX),
            get(handlers::albums::get_album)
                .put(handlers::albums::update_album)
                .delete(handlers::albums::delete_album),
        )
}

pub fn song_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/songs", API_PREFIX),
            get(handlers::songs::list_songs),
        )
        .route(
            &format!("{}/songs/upload", API_PREFIX),
            post(handlers::song_upload::upload_song),
        )
        .route(
            &format!("{}/songs/{{id}}", API_PREFIX),
            get(handlers::songs::get_song)
                .put(handlers::songs::update_song)
                .delete(handlers::songs::delete_song),
        )
        .route(
            &format!("{}/songs/{{id}}/stream", API_PREFIX),
            get(handlers::song_stream::stream_song),
        )
}
