//! Faculty CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use unipas_core::error::CoreError;
use unipas_core::types::DbId;
use unipas_db::models::department::Department;
use unipas_db::models::faculty::{CreateFaculty, Faculty, UpdateFaculty};
use unipas_db::repositories::{DepartmentRepo, FacultyRepo};

use super::{check_include_inactive, require_non_empty, resolve_slug, validate_slug};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

/// `POST /api/v1/faculties`
pub async fn create_faculty(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateFaculty>,
) -> AppResult<(StatusCode, Json<Faculty>)> {
    require_non_empty(&input.name, "name")?;
    let slug = resolve_slug(input.slug.as_deref(), &input.name)?;

    let faculty = FacultyRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(faculty_id = faculty.id, user_id = user.user_id, "Faculty created");
    Ok((StatusCode::CREATED, Json(faculty)))
}

/// `GET /api/v1/faculties`
pub async fn list_faculties(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<Faculty>>> {
    check_include_inactive(params.include_inactive, &auth)?;
    let faculties = FacultyRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(faculties))
}

/// `GET /api/v1/faculties/{id}` (admin forms, any active state)
pub async fn get_faculty(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Faculty>> {
    let faculty = FacultyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Faculty",
            id,
        })?;
    Ok(Json(faculty))
}

/// `GET /api/v1/faculties/slug/{slug}` (public detail pages)
pub async fn get_faculty_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Faculty>> {
    let faculty = FacultyRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::SlugNotFound {
            entity: "Faculty",
            slug: slug.clone(),
        })?;
    Ok(Json(faculty))
}

/// `GET /api/v1/faculties/{id}/departments`
pub async fn list_faculty_departments(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<Department>>> {
    check_include_inactive(params.include_inactive, &auth)?;

    // 404 on a missing parent rather than an empty list.
    FacultyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Faculty",
            id,
        })?;

    let departments =
        DepartmentRepo::list_by_faculty(&state.pool, id, params.include_inactive).await?;
    Ok(Json(departments))
}

/// `PUT /api/v1/faculties/{id}`
pub async fn update_faculty(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaculty>,
) -> AppResult<Json<Faculty>> {
    if let Some(name) = &input.name {
        require_non_empty(name, "name")?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let faculty = FacultyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Faculty",
            id,
        })?;
    tracing::info!(faculty_id = id, user_id = user.user_id, "Faculty updated");
    Ok(Json(faculty))
}

/// `DELETE /api/v1/faculties/{id}`
///
/// Rejected with 400 while departments still reference the faculty.
pub async fn delete_faculty(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FacultyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Faculty",
            id,
        }));
    }
    tracing::info!(faculty_id = id, user_id = user.user_id, "Faculty deleted");
    Ok(StatusCode::NO_CONTENT)
}
