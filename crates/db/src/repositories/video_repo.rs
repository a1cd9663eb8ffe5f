//! Repository for the `videos` table.

use sqlx::PgPool;
use unipas_core::types::DbId;

use crate::models::video::{CreateVideo, UpdateVideo, Video, VideoListParams};

const COLUMNS: &str = "id, title, description, youtube_url, thumbnail_url, category, \
     duration_secs, view_count, is_featured, published_at, is_active, created_at, updated_at";

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

/// Provides CRUD operations for gallery videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos \
                (title, description, youtube_url, thumbnail_url, category, duration_secs, \
                 is_featured, published_at, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, FALSE), \
                 COALESCE($8, NOW()), COALESCE($9, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.youtube_url)
            .bind(&input.thumbnail_url)
            .bind(&input.category)
            .bind(input.duration_secs)
            .bind(input.is_featured)
            .bind(input.published_at)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List videos, newest first, with the gallery filters.
    pub async fn list(pool: &PgPool, params: &VideoListParams) -> Result<Vec<Video>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);

        let query = format!(
            "SELECT {COLUMNS} FROM videos \
             WHERE (is_active OR $1) \
               AND ($2::text IS NULL OR title ILIKE '%' || $2 || '%' \
                    OR description ILIKE '%' || $2 || '%') \
               AND ($3::text IS NULL OR category = $3) \
               AND ($4::boolean IS NULL OR is_featured = $4) \
             ORDER BY published_at DESC NULLS LAST, id DESC \
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(params.include_inactive)
            .bind(&params.q)
            .bind(&params.category)
            .bind(params.featured)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Record a playback on an active video. Atomic increment-and-return.
    pub async fn record_view(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET view_count = view_count + 1 \
             WHERE id = $1 AND is_active \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a video. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                youtube_url = COALESCE($4, youtube_url), \
                thumbnail_url = COALESCE($5, thumbnail_url), \
                category = COALESCE($6, category), \
                duration_secs = COALESCE($7, duration_secs), \
                is_featured = COALESCE($8, is_featured), \
                published_at = COALESCE($9, published_at), \
                is_active = COALESCE($10, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.youtube_url)
            .bind(&input.thumbnail_url)
            .bind(&input.category)
            .bind(input.duration_secs)
            .bind(input.is_featured)
            .bind(input.published_at)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a video by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
