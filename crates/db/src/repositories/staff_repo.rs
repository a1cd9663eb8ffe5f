//! Repository for the `staff` table.

use sqlx::PgPool;
use unipas_core::types::DbId;

use crate::models::staff::{CreateStaff, Staff, StaffListParams, UpdateStaff};

const COLUMNS: &str = "id, name, position, role, faculty_id, department_id, nidn, \
     email, phone, photo_url, bio, is_active, created_at, updated_at";

/// Provides CRUD operations for staff records.
pub struct StaffRepo;

impl StaffRepo {
    /// Insert a new staff record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStaff) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff \
                (name, position, role, faculty_id, department_id, nidn, email, phone, \
                 photo_url, bio, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.role)
            .bind(input.faculty_id)
            .bind(input.department_id)
            .bind(&input.nidn)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.photo_url)
            .bind(&input.bio)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a staff record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List staff filtered by role and/or academic unit, ordered by name.
    ///
    /// Every active filter is applied conjunctively.
    pub async fn list(pool: &PgPool, params: &StaffListParams) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff \
             WHERE (is_active OR $1) \
               AND ($2::text IS NULL OR role = $2) \
               AND ($3::bigint IS NULL OR faculty_id = $3) \
               AND ($4::bigint IS NULL OR department_id = $4) \
             ORDER BY name"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(params.include_inactive)
            .bind(&params.role)
            .bind(params.faculty_id)
            .bind(params.department_id)
            .fetch_all(pool)
            .await
    }

    /// Update a staff record. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaff,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET \
                name = COALESCE($2, name), \
                position = COALESCE($3, position), \
                role = COALESCE($4, role), \
                faculty_id = COALESCE($5, faculty_id), \
                department_id = COALESCE($6, department_id), \
                nidn = COALESCE($7, nidn), \
                email = COALESCE($8, email), \
                phone = COALESCE($9, phone), \
                photo_url = COALESCE($10, photo_url), \
                bio = COALESCE($11, bio), \
                is_active = COALESCE($12, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.role)
            .bind(input.faculty_id)
            .bind(input.department_id)
            .bind(&input.nidn)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.photo_url)
            .bind(&input.bio)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a staff record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
