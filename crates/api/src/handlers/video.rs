//! Video gallery CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use unipas_core::error::CoreError;
use unipas_core::types::DbId;
use unipas_db::models::video::{CreateVideo, UpdateVideo, Video, VideoListParams};
use unipas_db::repositories::VideoRepo;

use super::{check_include_inactive, require_non_empty};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// `POST /api/v1/videos`
pub async fn create_video(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<(StatusCode, Json<Video>)> {
    require_non_empty(&input.title, "title")?;
    require_non_empty(&input.youtube_url, "youtube_url")?;

    let video = VideoRepo::create(&state.pool, &input).await?;
    tracing::info!(video_id = video.id, user_id = user.user_id, "Video created");
    Ok((StatusCode::CREATED, Json(video)))
}

/// `GET /api/v1/videos`
pub async fn list_videos(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<VideoListParams>,
) -> AppResult<Json<Vec<Video>>> {
    check_include_inactive(params.include_inactive, &auth)?;
    let videos = VideoRepo::list(&state.pool, &params).await?;
    Ok(Json(videos))
}

/// `GET /api/v1/videos/{id}`
pub async fn get_video(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Video>> {
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Video", id })?;
    Ok(Json(video))
}

/// `POST /api/v1/videos/{id}/view`
///
/// Public. The frontend calls this when playback starts; returns the row
/// with the updated counter.
pub async fn record_video_view(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Video>> {
    let video = VideoRepo::record_view(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Video", id })?;
    Ok(Json(video))
}

/// `PUT /api/v1/videos/{id}`
pub async fn update_video(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVideo>,
) -> AppResult<Json<Video>> {
    if let Some(title) = &input.title {
        require_non_empty(title, "title")?;
    }
    if let Some(url) = &input.youtube_url {
        require_non_empty(url, "youtube_url")?;
    }

    let video = VideoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Video", id })?;
    tracing::info!(video_id = id, user_id = user.user_id, "Video updated");
    Ok(Json(video))
}

/// `DELETE /api/v1/videos/{id}`
pub async fn delete_video(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VideoRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Video", id }));
    }
    tracing::info!(video_id = id, user_id = user.user_id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}
