//! Admin user management handlers. All routes require the `admin` role.
//!
//! Accounts are deactivated rather than deleted so audit history (and
//! content attribution) stays intact.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use unipas_core::error::CoreError;
use unipas_core::roles::ALL_ROLES;
use unipas_core::types::DbId;
use unipas_db::models::user::{CreateUser, UpdateUser, UserWithRole};
use unipas_db::repositories::{RoleRepo, SessionRepo, UserRepo};

use super::require_non_empty;
use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

async fn resolve_role_id(state: &AppState, role: &str) -> AppResult<DbId> {
    if !ALL_ROLES.contains(&role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown role '{role}'"
        ))));
    }
    let row = RoleRepo::find_by_name(&state.pool, role)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Role '{role}' missing from database")))?;
    Ok(row.id)
}

/// `POST /api/v1/admin/users`
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserWithRole>)> {
    require_non_empty(&input.username, "username")?;
    require_non_empty(&input.email, "email")?;
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role_id = resolve_role_id(&state, &input.role).await?;
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &input.username,
        &input.email,
        &password_hash,
        role_id,
    )
    .await?;

    let created = UserRepo::find_with_role(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created user vanished".into()))?;
    tracing::info!(user_id = created.id, admin_id = admin.user_id, "User created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/v1/admin/users`
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserWithRole>>> {
    let users = UserRepo::list_with_roles(&state.pool).await?;
    Ok(Json(users))
}

/// `GET /api/v1/admin/users/{id}`
pub async fn get_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserWithRole>> {
    let user = UserRepo::find_with_role(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    Ok(Json(user))
}

/// `PUT /api/v1/admin/users/{id}`
///
/// Deactivating an account also revokes its live sessions, so the user
/// cannot refresh an access token afterwards.
pub async fn update_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<UserWithRole>> {
    let role_id = match input.role.as_deref() {
        Some(role) => Some(resolve_role_id(&state, role).await?),
        None => None,
    };

    UserRepo::update(&state.pool, id, &input, role_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;

    if input.is_active == Some(false) {
        let revoked = SessionRepo::revoke_all_for_user(&state.pool, id).await?;
        tracing::info!(user_id = id, revoked, "Sessions revoked on deactivation");
    }

    let updated = UserRepo::find_with_role(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    tracing::info!(user_id = id, admin_id = admin.user_id, "User updated");
    Ok(Json(updated))
}

/// `POST /api/v1/admin/users/{id}/reset-password`
///
/// Sets a new password and revokes every live session of the user.
pub async fn reset_password(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let updated = UserRepo::set_password_hash(&state.pool, id, &password_hash).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    SessionRepo::revoke_all_for_user(&state.pool, id).await?;
    tracing::info!(user_id = id, admin_id = admin.user_id, "Password reset");
    Ok(StatusCode::NO_CONTENT)
}
