//! Homepage hero slider models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unipas_core::types::{DbId, Timestamp};

/// A row from the `hero_sliders` table. A rotating banner shown on the
/// homepage, ordered by `sort_order`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSlider {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a hero slider.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHeroSlider {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for updating a hero slider. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHeroSlider {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
