//! Repository for the `faculties` table.

use sqlx::PgPool;
use unipas_core::types::DbId;

use crate::models::faculty::{CreateFaculty, Faculty, UpdateFaculty};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, abbreviation, description, vision, mission, \
     image_url, is_active, created_at, updated_at";

/// Provides CRUD operations for faculties.
pub struct FacultyRepo;

impl FacultyRepo {
    /// Insert a new faculty, returning the created row.
    ///
    /// The caller resolves `slug` (generated or validated) before calling.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFaculty,
        slug: &str,
    ) -> Result<Faculty, sqlx::Error> {
        let query = format!(
            "INSERT INTO faculties \
                (name, slug, abbreviation, description, vision, mission, image_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.abbreviation)
            .bind(&input.description)
            .bind(&input.vision)
            .bind(&input.mission)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a faculty by its internal ID, regardless of active state.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faculties WHERE id = $1");
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active faculty by slug. Public pages fetch by slug only.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faculties WHERE slug = $1 AND is_active");
        sqlx::query_as::<_, Faculty>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List faculties ordered by name. Inactive rows are excluded unless
    /// `include_inactive` is set (admin views).
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Faculty>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faculties WHERE (is_active OR $1) ORDER BY name"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a faculty. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaculty,
    ) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!(
            "UPDATE faculties SET \
                name = COALESCE($2, name), \
                slug = COALESCE($3, slug), \
                abbreviation = COALESCE($4, abbreviation), \
                description = COALESCE($5, description), \
                vision = COALESCE($6, vision), \
                mission = COALESCE($7, mission), \
                image_url = COALESCE($8, image_url), \
                is_active = COALESCE($9, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.abbreviation)
            .bind(&input.description)
            .bind(&input.vision)
            .bind(&input.mission)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a faculty by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while departments still
    /// reference the faculty (`ON DELETE RESTRICT`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faculties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
