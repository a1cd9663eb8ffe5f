//! Staff CRUD handlers.
//!
//! Staff records carry structural association rules (a dean belongs to a
//! faculty, a head or lecturer to a department); those rules live in
//! `unipas_core::staff` and are enforced here on both create and update.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use unipas_core::error::CoreError;
use unipas_core::staff::validate_staff_association;
use unipas_core::types::DbId;
use unipas_db::models::staff::{CreateStaff, Staff, StaffListParams, UpdateStaff};
use unipas_db::repositories::StaffRepo;

use super::{check_include_inactive, require_non_empty};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// `POST /api/v1/staff`
pub async fn create_staff(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    require_non_empty(&input.name, "name")?;
    validate_staff_association(&input.role, input.faculty_id, input.department_id)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let staff = StaffRepo::create(&state.pool, &input).await?;
    tracing::info!(staff_id = staff.id, user_id = user.user_id, "Staff created");
    Ok((StatusCode::CREATED, Json(staff)))
}

/// `GET /api/v1/staff`
pub async fn list_staff(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<StaffListParams>,
) -> AppResult<Json<Vec<Staff>>> {
    check_include_inactive(params.include_inactive, &auth)?;
    let staff = StaffRepo::list(&state.pool, &params).await?;
    Ok(Json(staff))
}

/// `GET /api/v1/staff/{id}`
pub async fn get_staff(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Staff>> {
    let staff = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Staff", id })?;
    Ok(Json(staff))
}

/// `PUT /api/v1/staff/{id}`
///
/// The association rules are revalidated against the merged row (current
/// values overlaid with the update), so a partial update cannot leave an
/// inconsistent role/unit combination behind.
pub async fn update_staff(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStaff>,
) -> AppResult<Json<Staff>> {
    if let Some(name) = &input.name {
        require_non_empty(name, "name")?;
    }

    let current = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Staff", id })?;

    let merged_role = input.role.as_deref().unwrap_or(&current.role);
    let merged_faculty = input.faculty_id.or(current.faculty_id);
    let merged_department = input.department_id.or(current.department_id);
    validate_staff_association(merged_role, merged_faculty, merged_department)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let staff = StaffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Staff", id })?;
    tracing::info!(staff_id = id, user_id = user.user_id, "Staff updated");
    Ok(Json(staff))
}

/// `DELETE /api/v1/staff/{id}`
pub async fn delete_staff(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StaffRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Staff", id }));
    }
    tracing::info!(staff_id = id, user_id = user.user_id, "Staff deleted");
    Ok(StatusCode::NO_CONTENT)
}
