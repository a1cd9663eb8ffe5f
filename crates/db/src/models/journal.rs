//! Academic journal publication models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipas_core::types::{DbId, Timestamp};

/// A row from the `journals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Journal {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub abstract_text: Option<String>,
    /// Comma-separated author names as displayed on the publication.
    pub authors: String,
    pub faculty_id: Option<DbId>,
    pub category: Option<String>,
    pub year: i32,
    pub pdf_url: Option<String>,
    pub download_count: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a journal entry. `slug` defaults to a slugified `title`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJournal {
    pub title: String,
    pub slug: Option<String>,
    pub abstract_text: Option<String>,
    pub authors: String,
    pub faculty_id: Option<DbId>,
    pub category: Option<String>,
    pub year: i32,
    pub pdf_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a journal entry. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJournal {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub abstract_text: Option<String>,
    pub authors: Option<String>,
    pub faculty_id: Option<DbId>,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub pdf_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters for `GET /api/v1/journals`.
///
/// All active filters are applied conjunctively; `q` is a case-insensitive
/// substring match over title and authors.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub faculty_id: Option<DbId>,
    pub year: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub include_inactive: bool,
}
