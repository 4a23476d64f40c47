use super::parse_id;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::CatalogState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use melodia_core::models::{Artist, ArtistRequest};
use melodia_core::AppError;

#[utoipa::path(
    get,
    path = "/api/v1/artists",
    tag = "artists",
    responses(
        (status = 200, description = "All artists ordered by name", body = Vec<Artist>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog), fields(operation = "list_artists"))]
pub async fn list_artists(
    State(catalog): State<CatalogState>,
) -> Result<impl IntoResponse, HttpAppError> {
    let artists = catalog.artists.list_artists().await?;
    Ok(Json(artists))
}

#[utoipa::path(
    post,
    path = "/api/v1/artists",
    tag = "artists",
    request_body = ArtistRequest,
    responses(
        (status = 201, description = "Artist created", body = Artist),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Artist name already taken", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog, request), fields(operation = "create_artist"))]
pub async fn create_artist(
    State(catalog): State<CatalogState>,
    ValidatedJson(request): ValidatedJson<ArtistRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let artist = catalog
        .artists
        .create_artist(request.name.trim(), request.bio.as_deref())
        .await?;

    tracing::info!(artist_id = artist.id, "Artist created");
    Ok((StatusCode::CREATED, Json(artist)))
}

#[utoipa::path(
    get,
    path = "/api/v1/artists/{id}",
    tag = "artists",
    params(("id" = i64, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Artist", body = Artist),
        (status = 404, description = "Artist not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog), fields(operation = "get_artist"))]
pub async fn get_artist(
    State(catalog): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_id(&id, "artist")?;
    let artist = catalog
        .artists
        .get_artist(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    Ok(Json(artist))
}

#[utoipa::path(
    put,
    path = "/api/v1/artists/{id}",
    tag = "artists",
    params(("id" = i64, Path, description = "Artist ID")),
    request_body = ArtistRequest,
    responses(
        (status = 200, description = "Artist updated", body = Artist),
        (status = 404, description = "Artist not found", body = ErrorResponse),
        (status = 409, description = "Artist name already taken", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog, request), fields(operation = "update_artist"))]
pub async fn update_artist(
    State(catalog): State<CatalogState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ArtistRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_id(&id, "artist")?;
    let artist = catalog
        .artists
        .update_artist(id, request.name.trim(), request.bio.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    Ok(Json(artist))
}

#[utoipa::path(
    delete,
    path = "/api/v1/artists/{id}",
    tag = "artists",
    params(("id" = i64, Path, description = "Artist ID")),
    responses(
        (status = 204, description = "Artist deleted"),
        (status = 404, description = "Artist not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(catalog), fields(operation = "delete_artist"))]
pub async fn delete_artist(
    State(catalog): State<CatalogState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_id(&id, "artist")?;
    if !catalog.artists.delete_artist(id).await? {
        return Err(AppError::NotFound("Artist not found".to_string()).into());
    }

    tracing::info!(artist_id = id, "Artist deleted");
    Ok(StatusCode::NO_CONTENT)
}
