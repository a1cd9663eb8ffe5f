//! Homepage hero slider CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use unipas_core::error::CoreError;
use unipas_core::types::DbId;
use unipas_db::models::hero_slider::{CreateHeroSlider, HeroSlider, UpdateHeroSlider};
use unipas_db::repositories::HeroSliderRepo;

use super::{check_include_inactive, require_non_empty};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

/// `POST /api/v1/hero-sliders`
pub async fn create_hero_slider(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateHeroSlider>,
) -> AppResult<(StatusCode, Json<HeroSlider>)> {
    require_non_empty(&input.title, "title")?;
    require_non_empty(&input.image_url, "image_url")?;

    let slider = HeroSliderRepo::create(&state.pool, &input).await?;
    tracing::info!(slider_id = slider.id, user_id = user.user_id, "Hero slider created");
    Ok((StatusCode::CREATED, Json(slider)))
}

/// `GET /api/v1/hero-sliders`
///
/// Ordered by `sort_order`; the homepage renders the list as-is.
pub async fn list_hero_sliders(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<HeroSlider>>> {
    check_include_inactive(params.include_inactive, &auth)?;
    let sliders = HeroSliderRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(sliders))
}

/// `GET /api/v1/hero-sliders/{id}`
pub async fn get_hero_slider(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HeroSlider>> {
    let slider = HeroSliderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "HeroSlider",
            id,
        })?;
    Ok(Json(slider))
}

/// `PUT /api/v1/hero-sliders/{id}`
pub async fn update_hero_slider(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHeroSlider>,
) -> AppResult<Json<HeroSlider>> {
    if let Some(title) = &input.title {
        require_non_empty(title, "title")?;
    }
    if let Some(url) = &input.image_url {
        require_non_empty(url, "image_url")?;
    }

    let slider = HeroSliderRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "HeroSlider",
            id,
        })?;
    tracing::info!(slider_id = id, user_id = user.user_id, "Hero slider updated");
    Ok(Json(slider))
}

/// `DELETE /api/v1/hero-sliders/{id}`
pub async fn delete_hero_slider(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = HeroSliderRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "HeroSlider",
            id,
        }));
    }
    tracing::info!(slider_id = id, user_id = user.user_id, "Hero slider deleted");
    Ok(StatusCode::NO_CONTENT)
}
