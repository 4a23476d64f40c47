//! OpenAPI documentation, served at `/api/openapi.json`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use crate::setup::routes::health;
use melodia_core::models;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Melodia API",
        version = "0.1.0",
        description = "Music catalog API. Songs, artists and albums live in PostgreSQL; song audio is proxied to and from an object store. All catalog endpoints are versioned under /api/v1/."
    ),
    paths(
        health::health_check,
        // Songs
        handlers::songs::list_songs,
        handlers::songs::get_song,
        handlers::songs::update_song,
        handlers::songs::delete_song,
        handlers::song_upload::upload_song,
        handlers::song_stream::stream_song,
        // Artists
        handlers::artists::list_artists,
        handlers::artists::create_artist,
        handlers::artists::get_artist,
        handlers::artists::update_artist,
        handlers::artists::delete_artist,
        // Albums
        handlers::albums::list_albums,
        handlers::albums::create_album,
        handlers::albums::get_album,
        handlers::albums::update_album,
        handlers::albums::delete_album,
    ),
    components(schemas(
        models::Song,
        models::UpdateSongRequest,
        models::Artist,
        models::ArtistRequest,
        models::Album,
        models::AlbumRequest,
        health::HealthCheckResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "songs", description = "Song catalog, upload and streaming"),
        (name = "artists", description = "Artist catalog"),
        (name = "albums", description = "Album catalog"),
    )
)]
pub struct ApiDoc;
