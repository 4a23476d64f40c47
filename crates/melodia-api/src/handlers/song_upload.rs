//! Multipart song upload.
//!
//! The `file` part is spooled to an anonymous temp file while the rest of the form
//! is read, so metadata fields may come before or after the payload.

use crate::constants::UPLOAD_FILE_FIELD;
use crate::error::{ErrorResponse, HttpAppError};
use crate::services::SongLifecycleService;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use melodia_core::models::{NewSongUpload, Song};
use melodia_core::AppError;
use std::io::SeekFrom;
use tokio::fs::File;
use tokio::io::{AsyncSeekExt, AsyncWriteExt};

/// Payload spooled to disk, rewound and ready to read.
struct SpooledFile {
    file: File,
    size: u64,
    content_type: Option<String>,
}

#[derive(Default)]
struct UploadForm {
    metadata: NewSongUpload,
    file: Option<SpooledFile>,
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Upload exceeds the configured size limit: {}", e))
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", e))
    }
}

/// Numeric form fields that do not parse are treated as absent.
fn optional_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

async fn spool_field(mut field: axum::extract::multipart::Field<'_>) -> Result<SpooledFile, AppError> {
    let content_type = field.content_type().map(|s| s.to_string());

    let std_file = tempfile::tempfile()?;
    let mut file = File::from_std(std_file);
    let mut size: u64 = 0;

    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        file.write_all(&chunk).await?;
        size += chunk.len() as u64;
    }
    file.flush().await?;
    file.seek(SeekFrom::Start(0)).await?;

    Ok(SpooledFile {
        file,
        size,
        content_type,
    })
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if name == UPLOAD_FILE_FIELD {
            if form.file.is_some() {
                return Err(AppError::InvalidInput(
                    "Multiple file fields are not allowed; send exactly one field named 'file'"
                        .to_string(),
                ));
            }
            form.file = Some(spool_field(field).await?);
            continue;
        }

        let value = field.text().await.map_err(multipart_error)?;
        match name.as_str() {
            "title" => form.metadata.title = value.trim().to_string(),
            "artist_id" => form.metadata.artist_id = optional_number(&value),
            "album_id" => form.metadata.album_id = optional_number(&value),
            "track_number" => form.metadata.track_number = optional_number(&value),
            "duration" => form.metadata.duration = optional_number(&value),
            other => tracing::debug!(field = other, "Ignoring unknown upload field"),
        }
    }

    Ok(form)
}

#[utoipa::path(
    post,
    path = "/api/v1/songs/upload",
    tag = "songs",
    request_body(content = inline(Object), content_type = "multipart/form-data",
        description = "Fields: file (required), title (required), artist_id, album_id, track_number, duration"),
    responses(
        (status = 201, description = "Song uploaded", body = Song),
        (status = 400, description = "Missing file or title", body = ErrorResponse),
        (status = 413, description = "Upload too large", body = ErrorResponse),
        (status = 500, description = "Storage failure; no song was created", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(songs, multipart), fields(operation = "upload_song"))]
pub async fn upload_song(
    State(songs): State<SongLifecycleService>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = read_form(multipart).await?;

    let spooled = form
        .file
        .ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;
    if form.metadata.title.is_empty() {
        return Err(AppError::InvalidInput("title is required".to_string()).into());
    }

    tracing::debug!(
        file_size = spooled.size,
        content_type = ?spooled.content_type,
        "Upload spooled"
    );

    let content_type = spooled.content_type.unwrap_or_default();
    let song = songs
        .upload(
            form.metadata,
            Box::pin(spooled.file),
            spooled.size,
            &content_type,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(song)))
}
