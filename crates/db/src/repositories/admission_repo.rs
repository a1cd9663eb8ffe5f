//! Repository for the `admissions` table.

use sqlx::PgPool;
use unipas_core::types::DbId;

use crate::models::admission::{Admission, CreateAdmission, UpdateAdmission};

const COLUMNS: &str = "id, name, slug, description, requirements, registration_start, \
     registration_end, quota, is_active, created_at, updated_at";

/// Provides CRUD operations for admission tracks.
pub struct AdmissionRepo;

impl AdmissionRepo {
    /// Insert a new admission track, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdmission,
        slug: &str,
    ) -> Result<Admission, sqlx::Error> {
        let query = format!(
            "INSERT INTO admissions \
                (name, slug, description, requirements, registration_start, \
                 registration_end, quota, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admission>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(input.registration_start)
            .bind(input.registration_end)
            .bind(input.quota)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find an admission track by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Admission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admissions WHERE id = $1");
        sqlx::query_as::<_, Admission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active admission track by slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Admission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admissions WHERE slug = $1 AND is_active");
        sqlx::query_as::<_, Admission>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List admission tracks ordered by registration start (earliest first,
    /// undated tracks last).
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<Admission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admissions WHERE (is_active OR $1) \
             ORDER BY registration_start NULLS LAST, name"
        );
        sqlx::query_as::<_, Admission>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update an admission track. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdmission,
    ) -> Result<Option<Admission>, sqlx::Error> {
        let query = format!(
            "UPDATE admissions SET \
                name = COALESCE($2, name), \
                slug = COALESCE($3, slug), \
                description = COALESCE($4, description), \
                requirements = COALESCE($5, requirements), \
                registration_start = COALESCE($6, registration_start), \
                registration_end = COALESCE($7, registration_end), \
                quota = COALESCE($8, quota), \
                is_active = COALESCE($9, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admission>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(input.registration_start)
            .bind(input.registration_end)
            .bind(input.quota)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an admission track by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM admissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
