//! Faculty models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipas_core::types::{DbId, Timestamp};

/// A row from the `faculties` table. Top-level academic unit grouping
/// departments.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faculty {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub abbreviation: Option<String>,
    pub description: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a faculty. When `slug` is omitted it is generated
/// from `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaculty {
    pub name: String,
    pub slug: Option<String>,
    pub abbreviation: Option<String>,
    pub description: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a faculty. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFaculty {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub abbreviation: Option<String>,
    pub description: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
