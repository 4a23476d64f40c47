use super::parse_id;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::SongLifecycleService;
use crate::state::CatalogState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use melodia_core::models::{Song, SongFilter, SongListQuery, UpdateSongRequest};
use melodia_core::AppError;

#[utoipa::path(
    get,
    path = "/api/v1/songs",
    tag = "songs",
    params(SongListQuery),
    responses(
        (status = 200, description = "Songs, optionally filtered by artist or album", body = Vec<Song>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog), fields(operation = "list_songs"))]
pub async fn list_songs(
    State(catalog): State<CatalogState>,
    Query(query): Query<SongListQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let songs = catalog.songs.list(SongFilter::from(&query)).await?;
    Ok(Json(songs))
}

#[utoipa::path(
    get,
    path = "/api/v1/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song ID")),
    responses(
        (status = 200, description = "Song", body = Song),
        (status = 400, description = "Malformed song ID", body = ErrorResponse),
        (status = 404, description = "Song not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog), fields(operation = "get_song"))]
pub async fn get_song(
    State(catalog): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_id(&id, "song")?;
    let song = catalog
        .songs
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Song not found".to_string()))?;

    Ok(Json(song))
}

#[utoipa::path(
    put,
    path = "/api/v1/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song ID")),
    request_body = UpdateSongRequest,
    responses(
        (status = 200, description = "Song updated", body = Song),
        (status = 400, description = "Invalid request or unknown artist/album", body = ErrorResponse),
        (status = 404, description = "Song not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog, request), fields(operation = "update_song"))]
pub async fn update_song(
    State(catalog): State<CatalogState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateSongRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_id(&id, "song")?;
    let song = catalog
        .songs
        .update(id, &request)
        .await?
        .ok_or_else(|| AppError::NotFound("Song not found".to_string()))?;

    Ok(Json(song))
}

/// Removes the stored audio, then the catalog entry.
#[utoipa::path(
    delete,
    path = "/api/v1/songs/{id}",
    tag = "songs",
    params(("id" = i64, Path, description = "Song ID")),
    responses(
        (status = 204, description = "Song and audio deleted"),
        (status = 404, description = "Song not found", body = ErrorResponse),
        (status = 500, description = "Audio could not be deleted; song kept", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(songs), fields(operation = "delete_song"))]
pub async fn delete_song(
    State(songs): State<SongLifecycleService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_id(&id, "song")?;
    songs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
