//! Repository for the `news` table.

use sqlx::PgPool;
use unipas_core::types::DbId;

use crate::models::news::{CreateNews, News, NewsListParams, UpdateNews};

const COLUMNS: &str = "id, title, slug, excerpt, content, category, image_url, is_featured, \
     published_at, view_count, is_active, created_at, updated_at";

/// Default page size for news listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for news listing.
const MAX_LIMIT: i64 = 200;

/// Provides CRUD operations for news articles.
pub struct NewsRepo;

impl NewsRepo {
    /// Insert a new article, returning the created row.
    ///
    /// `published_at` defaults to the insert time when omitted.
    pub async fn create(pool: &PgPool, input: &CreateNews, slug: &str) -> Result<News, sqlx::Error> {
        let query = format!(
            "INSERT INTO news \
                (title, slug, excerpt, content, category, image_url, is_featured, \
                 published_at, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, FALSE), \
                 COALESCE($8, NOW()), COALESCE($9, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(input.is_featured)
            .bind(input.published_at)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find an article by its internal ID, regardless of active state.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<News>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE id = $1");
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch an active article by slug and record the view.
    ///
    /// The counter increment and the fetch are one atomic statement, so
    /// concurrent readers cannot lose counts.
    pub async fn find_by_slug_and_record_view(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<News>, sqlx::Error> {
        let query = format!(
            "UPDATE news SET view_count = view_count + 1 \
             WHERE slug = $1 AND is_active \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List articles, newest first, with optional search/category/featured
    /// filters and pagination.
    pub async fn list(pool: &PgPool, params: &NewsListParams) -> Result<Vec<News>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);

        let query = format!(
            "SELECT {COLUMNS} FROM news \
             WHERE (is_active OR $1) \
               AND ($2::text IS NULL OR title ILIKE '%' || $2 || '%' \
                    OR excerpt ILIKE '%' || $2 || '%') \
               AND ($3::text IS NULL OR category = $3) \
               AND ($4::boolean IS NULL OR is_featured = $4) \
             ORDER BY published_at DESC NULLS LAST, id DESC \
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(params.include_inactive)
            .bind(&params.q)
            .bind(&params.category)
            .bind(params.featured)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update an article. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNews,
    ) -> Result<Option<News>, sqlx::Error> {
        let query = format!(
            "UPDATE news SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                excerpt = COALESCE($4, excerpt), \
                content = COALESCE($5, content), \
                category = COALESCE($6, category), \
                image_url = COALESCE($7, image_url), \
                is_featured = COALESCE($8, is_featured), \
                published_at = COALESCE($9, published_at), \
                is_active = COALESCE($10, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.excerpt)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(input.is_featured)
            .bind(input.published_at)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
