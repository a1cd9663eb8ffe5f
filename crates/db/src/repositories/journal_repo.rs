//! Repository for the `journals` table.

use sqlx::PgPool;
use unipas_core::types::DbId;

use crate::models::journal::{CreateJournal, Journal, JournalListParams, UpdateJournal};

const COLUMNS: &str = "id, title, slug, abstract_text, authors, faculty_id, category, \
     year, pdf_url, download_count, is_active, created_at, updated_at";

/// Default page size for journal listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for journal listing.
const MAX_LIMIT: i64 = 200;

/// Provides CRUD operations for journal publications.
pub struct JournalRepo;

impl JournalRepo {
    /// Insert a new journal entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJournal,
        slug: &str,
    ) -> Result<Journal, sqlx::Error> {
        let query = format!(
            "INSERT INTO journals \
                (title, slug, abstract_text, authors, faculty_id, category, year, \
                 pdf_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Journal>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.abstract_text)
            .bind(&input.authors)
            .bind(input.faculty_id)
            .bind(&input.category)
            .bind(input.year)
            .bind(&input.pdf_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a journal entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Journal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM journals WHERE id = $1");
        sqlx::query_as::<_, Journal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active journal entry by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Journal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM journals WHERE slug = $1 AND is_active");
        sqlx::query_as::<_, Journal>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List journal entries, newest year first, with the gallery filters:
    /// `q` (case-insensitive over title/authors), category, faculty, year.
    pub async fn list(
        pool: &PgPool,
        params: &JournalListParams,
    ) -> Result<Vec<Journal>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);

        let query = format!(
            "SELECT {COLUMNS} FROM journals \
             WHERE (is_active OR $1) \
               AND ($2::text IS NULL OR title ILIKE '%' || $2 || '%' \
                    OR authors ILIKE '%' || $2 || '%') \
               AND ($3::text IS NULL OR category = $3) \
               AND ($4::bigint IS NULL OR faculty_id = $4) \
               AND ($5::int IS NULL OR year = $5) \
             ORDER BY year DESC, title \
             LIMIT $6 OFFSET $7"
        );
        sqlx::query_as::<_, Journal>(&query)
            .bind(params.include_inactive)
            .bind(&params.q)
            .bind(&params.category)
            .bind(params.faculty_id)
            .bind(params.year)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Record a download on an active journal entry.
    ///
    /// Atomic increment-and-return; `None` when the entry does not exist
    /// or is inactive.
    pub async fn record_download(pool: &PgPool, id: DbId) -> Result<Option<Journal>, sqlx::Error> {
        let query = format!(
            "UPDATE journals SET download_count = download_count + 1 \
             WHERE id = $1 AND is_active \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Journal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a journal entry. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJournal,
    ) -> Result<Option<Journal>, sqlx::Error> {
        let query = format!(
            "UPDATE journals SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                abstract_text = COALESCE($4, abstract_text), \
                authors = COALESCE($5, authors), \
                faculty_id = COALESCE($6, faculty_id), \
                category = COALESCE($7, category), \
                year = COALESCE($8, year), \
                pdf_url = COALESCE($9, pdf_url), \
                is_active = COALESCE($10, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Journal>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.abstract_text)
            .bind(&input.authors)
            .bind(input.faculty_id)
            .bind(&input.category)
            .bind(input.year)
            .bind(&input.pdf_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a journal entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM journals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
