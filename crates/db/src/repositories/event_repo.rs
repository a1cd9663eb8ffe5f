//! Repository for the `events` table.

use sqlx::PgPool;
use unipas_core::types::DbId;

use crate::models::event::{CreateEvent, Event, EventListParams, UpdateEvent};

const COLUMNS: &str = "id, title, slug, description, location, starts_at, ends_at, \
     image_url, is_featured, is_active, created_at, updated_at";

/// Provides CRUD operations for campus events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEvent,
        slug: &str,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (title, slug, description, location, starts_at, ends_at, image_url, \
                 is_featured, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, FALSE), COALESCE($9, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.image_url)
            .bind(input.is_featured)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID, regardless of active state.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active event by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE slug = $1 AND is_active");
        sqlx::query_as::<_, Event>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List events by start time (soonest first).
    ///
    /// `upcoming=true` keeps only events that have not yet ended; an event
    /// without `ends_at` counts as ended once it has started a day ago.
    pub async fn list(pool: &PgPool, params: &EventListParams) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events \
             WHERE (is_active OR $1) \
               AND (NOT COALESCE($2, FALSE) \
                    OR COALESCE(ends_at, starts_at + INTERVAL '1 day') >= NOW()) \
               AND ($3::boolean IS NULL OR is_featured = $3) \
             ORDER BY starts_at"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(params.include_inactive)
            .bind(params.upcoming)
            .bind(params.featured)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                description = COALESCE($4, description), \
                location = COALESCE($5, location), \
                starts_at = COALESCE($6, starts_at), \
                ends_at = COALESCE($7, ends_at), \
                image_url = COALESCE($8, image_url), \
                is_featured = COALESCE($9, is_featured), \
                is_active = COALESCE($10, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.image_url)
            .bind(input.is_featured)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
