use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Performer that songs and albums may reference
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or replacing an artist
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct ArtistRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Artist name must be between 1 and 255 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 4000, message = "Artist bio must be at most 4000 characters"))]
    pub bio: Option<String>,
}
