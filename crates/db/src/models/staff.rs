//! Staff models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipas_core::types::{DbId, Timestamp};

/// A row from the `staff` table. A person record optionally tied to a
/// faculty (dean) or a department (head/lecturer); see
/// `unipas_core::staff` for the association rules.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Staff {
    pub id: DbId,
    pub name: String,
    pub position: Option<String>,
    /// One of `dean`, `head`, `lecturer`, `staff`.
    pub role: String,
    pub faculty_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub nidn: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a staff record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStaff {
    pub name: String,
    pub position: Option<String>,
    pub role: String,
    pub faculty_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub nidn: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a staff record. Only non-`None` fields are applied.
///
/// `role`, `faculty_id`, and `department_id` are revalidated against the
/// merged row in the handler, so a partial update cannot leave an
/// inconsistent association behind.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStaff {
    pub name: Option<String>,
    pub position: Option<String>,
    pub role: Option<String>,
    pub faculty_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub nidn: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters for `GET /api/v1/staff`.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffListParams {
    pub role: Option<String>,
    pub faculty_id: Option<DbId>,
    pub department_id: Option<DbId>,
    #[serde(default)]
    pub include_inactive: bool,
}
