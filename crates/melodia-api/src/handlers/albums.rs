use super::parse_id;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::CatalogState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use melodia_core::models::{Album, AlbumListQuery, AlbumRequest};
use melodia_core::AppError;

#[utoipa::path(
    get,
    path = "/api/v1/albums",
    tag = "albums",
    params(AlbumListQuery),
    responses(
        (status = 200, description = "Albums, optionally limited to one artist", body = Vec<Album>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog), fields(operation = "list_albums"))]
pub async fn list_albums(
    State(catalog): State<CatalogState>,
    Query(query): Query<AlbumListQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let albums = catalog.albums.list_albums(query.artist_id).await?;
    Ok(Json(albums))
}

#[utoipa::path(
    post,
    path = "/api/v1/albums",
    tag = "albums",
    request_body = AlbumRequest,
    responses(
        (status = 201, description = "Album created", body = Album),
        (status = 400, description = "Invalid request or unknown artist", body = ErrorResponse),
        (status = 409, description = "Artist already has an album with this title", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog, request), fields(operation = "create_album", artist_id = request.artist_id))]
pub async fn create_album(
    State(catalog): State<CatalogState>,
    ValidatedJson(request): ValidatedJson<AlbumRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let album = catalog
        .albums
        .create_album(
            request.title.trim(),
            request.artist_id,
            request.year,
            request.cover_art.as_deref(),
        )
        .await?;

    tracing::info!(album_id = album.id, "Album created");
    Ok((StatusCode::CREATED, Json(album)))
}

#[utoipa::path(
    get,
    path = "/api/v1/albums/{id}",
    tag = "albums",
    params(("id" = i64, Path, description = "Album ID")),
    responses(
        (status = 200, description = "Album", body = Album),
        (status = 404, description = "Album not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog), fields(operation = "get_album"))]
pub async fn get_album(
    State(catalog): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_id(&id, "album")?;
    let album = catalog
        .albums
        .get_album(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Album not found".to_string()))?;

    Ok(Json(album))
}

#[utoipa::path(
    put,
    path = "/api/v1/albums/{id}",
    tag = "albums",
    params(("id" = i64, Path, description = "Album ID")),
    request_body = AlbumRequest,
    responses(
        (status = 200, description = "Album updated", body = Album),
        (status = 400, description = "Invalid request or unknown artist", body = ErrorResponse),
        (status = 404, description = "Album not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog, request), fields(operation = "update_album"))]
pub async fn update_album(
    State(catalog): State<CatalogState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<AlbumRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_id(&id, "album")?;
    let album = catalog
        .albums
        .update_album(
            id,
            request.title.trim(),
            request.artist_id,
            request.year,
            request.cover_art.as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Album not found".to_string()))?;

    Ok(Json(album))
}

#[utoipa::path(
    delete,
    path = "/api/v1/albums/{id}",
    tag = "albums",
    params(("id" = i64, Path, description = "Album ID")),
    responses(
        (status = 204, description = "Album deleted"),
        (status = 404, description = "Album not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog), fields(operation = "delete_album"))]
pub async fn delete_album(
    State(catalog): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_id(&id, "album")?;
    if !catalog.albums.delete_album(id).await? {
        return Err(AppError::NotFound("Album not found".to_string()).into());
    }

    tracing::info!(album_id = id, "Album deleted");
    Ok(StatusCode::NO_CONTENT)
}
