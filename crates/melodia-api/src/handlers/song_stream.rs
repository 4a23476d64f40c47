use super::parse_id;
use crate::error::{ErrorResponse, HttpAppError};
use crate::services::SongLifecycleService;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
    response::IntoResponse,
};
use futures::StreamExt;
use melodia_core::AppError;

/// Proxy the stored audio object. The whole object is sent; range requests are
/// advertised but not honored.
#[utoipa::path(
    get,
    path = "/api/v1/songs/{id}/stream",
    tag = "songs",
    params(("id" = i64, Path, description = "Song ID")),
    responses(
        (status = 200, description = "Audio bytes", content_type = "audio/*"),
        (status = 404, description = "Song or its audio not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(songs), fields(operation = "stream_song"))]
pub async fn stream_song(
    State(songs): State<SongLifecycleService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_id(&id, "song")?;
    let opened = songs.stream(id).await?;

    tracing::debug!(
        song_id = id,
        file_size = opened.file_size,
        content_type = %opened.content_type,
        "Proxying song from storage"
    );

    let body_stream = opened.stream.map(|result| {
        result.map_err(|e| std::io::Error::other(format!("Storage stream error: {}", e)))
    });

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, opened.content_type.as_str())
        .header(header::ACCEPT_RANGES, "bytes")
        .body(Body::from_stream(body_stream))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
