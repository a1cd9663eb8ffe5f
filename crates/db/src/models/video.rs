//! Video gallery models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipas_core::types::{DbId, Timestamp};

/// A row from the `videos` table. Videos are hosted externally (YouTube);
/// only metadata lives here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub duration_secs: Option<i32>,
    pub view_count: i32,
    pub is_featured: bool,
    pub published_at: Option<Timestamp>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a video entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideo {
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub duration_secs: Option<i32>,
    pub is_featured: Option<bool>,
    pub published_at: Option<Timestamp>,
    pub is_active: Option<bool>,
}

/// DTO for updating a video entry. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub youtube_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub duration_secs: Option<i32>,
    pub is_featured: Option<bool>,
    pub published_at: Option<Timestamp>,
    pub is_active: Option<bool>,
}

/// Query parameters for `GET /api/v1/videos`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListParams {
    /// Case-insensitive substring match over title and description.
    pub q: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub include_inactive: bool,
}
