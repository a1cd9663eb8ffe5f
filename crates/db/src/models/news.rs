//! News article models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipas_core::types::{DbId, Timestamp};

/// A row from the `news` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub published_at: Option<Timestamp>,
    pub view_count: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a news article. `slug` defaults to a slugified
/// `title`; `published_at` defaults to the insert time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNews {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
    pub published_at: Option<Timestamp>,
    pub is_active: Option<bool>,
}

/// DTO for updating a news article. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNews {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
    pub published_at: Option<Timestamp>,
    pub is_active: Option<bool>,
}

/// Query parameters for `GET /api/v1/news`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsListParams {
    /// Case-insensitive substring match over title and excerpt.
    pub q: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub include_inactive: bool,
}
