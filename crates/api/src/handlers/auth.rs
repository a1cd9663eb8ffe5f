//! Authentication handlers: login, token refresh, logout, current user.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use unipas_core::error::CoreError;
use unipas_db::models::user::UserWithRole;
use unipas_db::repositories::{SessionRepo, UserRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Consecutive failures before an account is locked.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Lock duration after too many failures, in minutes.
const LOCK_DURATION_MINS: i32 = 15;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token pair returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    /// Access-token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserWithRole,
}

fn invalid_credentials() -> AppError {
    // Same message whether the username or the password was wrong.
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

async fn issue_tokens(state: &AppState, user: UserWithRole) -> AppResult<TokenResponse> {
    let config = &state.config.jwt;
    let access_token = generate_access_token(user.id, &user.role, config)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let (refresh_token, refresh_hash) = generate_refresh_token();
    let expires_at = Utc::now() + Duration::days(config.refresh_token_expiry_days);
    SessionRepo::create(&state.pool, user.id, &refresh_hash, expires_at).await?;

    Ok(TokenResponse {
        access_token,
        refresh_token,
        token_type: "Bearer",
        expires_in: config.access_token_expiry_mins * 60,
        user,
    })
}

/// `POST /api/v1/auth/login`
///
/// Verifies credentials against the Argon2id hash, with lockout after
/// [`MAX_FAILED_ATTEMPTS`] consecutive failures.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Account is temporarily locked. Try again later".into(),
            )));
        }
    }
    if !user.is_active {
        return Err(invalid_credentials());
    }

    let verified = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        UserRepo::record_login_failure(&state.pool, user.id, MAX_FAILED_ATTEMPTS, LOCK_DURATION_MINS)
            .await?;
        tracing::warn!(user_id = user.id, "Failed login attempt");
        return Err(invalid_credentials());
    }

    UserRepo::reset_login_failures(&state.pool, user.id).await?;

    let user_with_role = UserRepo::find_with_role(&state.pool, user.id)
        .await?
        .ok_or_else(invalid_credentials)?;
    tracing::info!(user_id = user_with_role.id, "User logged in");

    let tokens = issue_tokens(&state, user_with_role).await?;
    Ok(Json(tokens))
}

/// `POST /api/v1/auth/refresh`
///
/// Exchanges a live refresh token for a fresh token pair. The presented
/// token is revoked in the same request (rotation), so a replayed token
/// fails with 401.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<TokenResponse>> {
    let hash = hash_refresh_token(&input.refresh_token);
    let session = SessionRepo::find_active_by_hash(&state.pool, &hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke_by_hash(&state.pool, &hash).await?;

    let user = UserRepo::find_with_role(&state.pool, session.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account is no longer active".into()))
        })?;

    let tokens = issue_tokens(&state, user).await?;
    Ok(Json(tokens))
}

/// `POST /api/v1/auth/logout`
///
/// Revokes the presented refresh token. Idempotent: logging out an
/// already-revoked token still succeeds.
pub async fn logout(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<StatusCode> {
    let hash = hash_refresh_token(&input.refresh_token);
    SessionRepo::revoke_by_hash(&state.pool, &hash).await?;
    tracing::info!(user_id = user.user_id, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/v1/auth/me`
pub async fn me(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<UserWithRole>> {
    let profile = UserRepo::find_with_role(&state.pool, user.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        })?;
    Ok(Json(profile))
}
