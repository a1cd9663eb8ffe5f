//! Admission track (jalur penerimaan) models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipas_core::types::{DbId, Timestamp};

/// A row from the `admissions` table. An enrollment track with a
/// registration window and an optional seat quota.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admission {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub registration_start: Option<Timestamp>,
    pub registration_end: Option<Timestamp>,
    pub quota: Option<i32>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an admission track.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdmission {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub registration_start: Option<Timestamp>,
    pub registration_end: Option<Timestamp>,
    pub quota: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating an admission track. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAdmission {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub registration_start: Option<Timestamp>,
    pub registration_end: Option<Timestamp>,
    pub quota: Option<i32>,
    pub is_active: Option<bool>,
}
