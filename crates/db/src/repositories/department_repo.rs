//! Repository for the `departments` table.

use sqlx::PgPool;
use unipas_core::types::DbId;

use crate::models::department::{CreateDepartment, Department, UpdateDepartment};

const COLUMNS: &str = "id, faculty_id, name, slug, degree, accreditation, description, \
     image_url, is_active, created_at, updated_at";

/// Provides CRUD operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a new department, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDepartment,
        slug: &str,
    ) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments \
                (faculty_id, name, slug, degree, accreditation, description, image_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(input.faculty_id)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.degree)
            .bind(&input.accreditation)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a department by its internal ID, regardless of active state.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active department by slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE slug = $1 AND is_active");
        sqlx::query_as::<_, Department>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all departments ordered by name.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM departments WHERE (is_active OR $1) ORDER BY name"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// List the departments of one faculty, ordered by name.
    pub async fn list_by_faculty(
        pool: &PgPool,
        faculty_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM departments \
             WHERE faculty_id = $1 AND (is_active OR $2) \
             ORDER BY name"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(faculty_id)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a department. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDepartment,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!(
            "UPDATE departments SET \
                faculty_id = COALESCE($2, faculty_id), \
                name = COALESCE($3, name), \
                slug = COALESCE($4, slug), \
                degree = COALESCE($5, degree), \
                accreditation = COALESCE($6, accreditation), \
                description = COALESCE($7, description), \
                image_url = COALESCE($8, image_url), \
                is_active = COALESCE($9, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .bind(input.faculty_id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.degree)
            .bind(&input.accreditation)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a department by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
