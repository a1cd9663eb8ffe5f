//! Department (Program Studi) models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipas_core::types::{DbId, Timestamp};

/// A row from the `departments` table. A degree program belonging to
/// exactly one faculty.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub faculty_id: DbId,
    pub name: String,
    pub slug: String,
    /// Degree level, e.g. `"S1"`.
    pub degree: Option<String>,
    pub accreditation: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a department. `slug` defaults to a slugified `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartment {
    pub faculty_id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub degree: Option<String>,
    pub accreditation: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a department. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDepartment {
    pub faculty_id: Option<DbId>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub degree: Option<String>,
    pub accreditation: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
