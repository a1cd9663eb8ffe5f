//! Repository for the `hero_sliders` table.

use sqlx::PgPool;
use unipas_core::types::DbId;

use crate::models::hero_slider::{CreateHeroSlider, HeroSlider, UpdateHeroSlider};

const COLUMNS: &str = "id, title, subtitle, image_url, cta_label, cta_url, sort_order, \
     is_active, created_at, updated_at";

/// Provides CRUD operations for homepage hero sliders.
pub struct HeroSliderRepo;

impl HeroSliderRepo {
    /// Insert a new slider, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHeroSlider,
    ) -> Result<HeroSlider, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_sliders \
                (title, subtitle, image_url, cta_label, cta_url, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), COALESCE($7, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlider>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_url)
            .bind(&input.cta_label)
            .bind(&input.cta_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a slider by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroSlider>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_sliders WHERE id = $1");
        sqlx::query_as::<_, HeroSlider>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List sliders in display order.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<HeroSlider>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hero_sliders WHERE (is_active OR $1) \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, HeroSlider>(&query)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Update a slider. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroSlider,
    ) -> Result<Option<HeroSlider>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_sliders SET \
                title = COALESCE($2, title), \
                subtitle = COALESCE($3, subtitle), \
                image_url = COALESCE($4, image_url), \
                cta_label = COALESCE($5, cta_label), \
                cta_url = COALESCE($6, cta_url), \
                sort_order = COALESCE($7, sort_order), \
                is_active = COALESCE($8, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlider>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_url)
            .bind(&input.cta_label)
            .bind(&input.cta_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slider by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero_sliders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
