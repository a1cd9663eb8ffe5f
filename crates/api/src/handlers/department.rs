//! Department CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use unipas_core::error::CoreError;
use unipas_core::types::DbId;
use unipas_db::models::department::{CreateDepartment, Department, UpdateDepartment};
use unipas_db::repositories::{DepartmentRepo, FacultyRepo};

use super::{check_include_inactive, require_non_empty, resolve_slug, validate_slug};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

/// `POST /api/v1/departments`
///
/// The parent faculty is checked up front so a bad `faculty_id` yields a
/// clear 400 instead of a raw foreign-key error.
pub async fn create_department(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateDepartment>,
) -> AppResult<(StatusCode, Json<Department>)> {
    require_non_empty(&input.name, "name")?;
    let slug = resolve_slug(input.slug.as_deref(), &input.name)?;

    if FacultyRepo::find_by_id(&state.pool, input.faculty_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Faculty {} does not exist",
            input.faculty_id
        ))));
    }

    let department = DepartmentRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(
        department_id = department.id,
        user_id = user.user_id,
        "Department created"
    );
    Ok((StatusCode::CREATED, Json(department)))
}

/// `GET /api/v1/departments`
pub async fn list_departments(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<Department>>> {
    check_include_inactive(params.include_inactive, &auth)?;
    let departments = DepartmentRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(departments))
}

/// `GET /api/v1/departments/{id}`
pub async fn get_department(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Department>> {
    let department = DepartmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Department",
            id,
        })?;
    Ok(Json(department))
}

/// `GET /api/v1/departments/slug/{slug}`
pub async fn get_department_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Department>> {
    let department = DepartmentRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::SlugNotFound {
            entity: "Department",
            slug: slug.clone(),
        })?;
    Ok(Json(department))
}

/// `PUT /api/v1/departments/{id}`
pub async fn update_department(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDepartment>,
) -> AppResult<Json<Department>> {
    if let Some(name) = &input.name {
        require_non_empty(name, "name")?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    if let Some(faculty_id) = input.faculty_id {
        if FacultyRepo::find_by_id(&state.pool, faculty_id)
            .await?
            .is_none()
        {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Faculty {faculty_id} does not exist"
            ))));
        }
    }

    let department = DepartmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Department",
            id,
        })?;
    tracing::info!(department_id = id, user_id = user.user_id, "Department updated");
    Ok(Json(department))
}

/// `DELETE /api/v1/departments/{id}`
pub async fn delete_department(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DepartmentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }));
    }
    tracing::info!(department_id = id, user_id = user.user_id, "Department deleted");
    Ok(StatusCode::NO_CONTENT)
}
