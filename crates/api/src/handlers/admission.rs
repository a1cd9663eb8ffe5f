//! Admission track CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use unipas_core::error::CoreError;
use unipas_core::types::DbId;
use unipas_db::models::admission::{Admission, CreateAdmission, UpdateAdmission};
use unipas_db::repositories::AdmissionRepo;

use super::{check_include_inactive, require_non_empty, resolve_slug, validate_slug};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

fn check_quota(quota: Option<i32>) -> Result<(), AppError> {
    if let Some(q) = quota {
        if q < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "quota must not be negative".into(),
            )));
        }
    }
    Ok(())
}

/// `POST /api/v1/admissions`
pub async fn create_admission(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateAdmission>,
) -> AppResult<(StatusCode, Json<Admission>)> {
    require_non_empty(&input.name, "name")?;
    check_quota(input.quota)?;
    let slug = resolve_slug(input.slug.as_deref(), &input.name)?;

    let admission = AdmissionRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(
        admission_id = admission.id,
        user_id = user.user_id,
        "Admission track created"
    );
    Ok((StatusCode::CREATED, Json(admission)))
}

/// `GET /api/v1/admissions`
pub async fn list_admissions(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<Admission>>> {
    check_include_inactive(params.include_inactive, &auth)?;
    let admissions = AdmissionRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(admissions))
}

/// `GET /api/v1/admissions/{id}`
pub async fn get_admission(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Admission>> {
    let admission = AdmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Admission",
            id,
        })?;
    Ok(Json(admission))
}

/// `GET /api/v1/admissions/slug/{slug}`
pub async fn get_admission_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Admission>> {
    let admission = AdmissionRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::SlugNotFound {
            entity: "Admission",
            slug: slug.clone(),
        })?;
    Ok(Json(admission))
}

/// `PUT /api/v1/admissions/{id}`
pub async fn update_admission(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdmission>,
) -> AppResult<Json<Admission>> {
    if let Some(name) = &input.name {
        require_non_empty(name, "name")?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    check_quota(input.quota)?;

    let admission = AdmissionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Admission",
            id,
        })?;
    tracing::info!(admission_id = id, user_id = user.user_id, "Admission track updated");
    Ok(Json(admission))
}

/// `DELETE /api/v1/admissions/{id}`
pub async fn delete_admission(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AdmissionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Admission",
            id,
        }));
    }
    tracing::info!(admission_id = id, user_id = user.user_id, "Admission track deleted");
    Ok(StatusCode::NO_CONTENT)
}
