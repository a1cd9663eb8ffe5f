//! Campus event CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use unipas_core::error::CoreError;
use unipas_core::types::{DbId, Timestamp};
use unipas_db::models::event::{CreateEvent, Event, EventListParams, UpdateEvent};
use unipas_db::repositories::EventRepo;

use super::{check_include_inactive, require_non_empty, resolve_slug, validate_slug};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

fn check_window(starts_at: Timestamp, ends_at: Option<Timestamp>) -> Result<(), AppError> {
    if let Some(ends) = ends_at {
        if ends < starts_at {
            return Err(AppError::Core(CoreError::Validation(
                "ends_at must not be earlier than starts_at".into(),
            )));
        }
    }
    Ok(())
}

/// `POST /api/v1/events`
pub async fn create_event(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    require_non_empty(&input.title, "title")?;
    check_window(input.starts_at, input.ends_at)?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;

    let event = EventRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(event_id = event.id, user_id = user.user_id, "Event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// `GET /api/v1/events`
pub async fn list_events(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<Json<Vec<Event>>> {
    check_include_inactive(params.include_inactive, &auth)?;
    let events = EventRepo::list(&state.pool, &params).await?;
    Ok(Json(events))
}

/// `GET /api/v1/events/{id}`
pub async fn get_event(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;
    Ok(Json(event))
}

/// `GET /api/v1/events/slug/{slug}`
pub async fn get_event_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::SlugNotFound {
            entity: "Event",
            slug: slug.clone(),
        })?;
    Ok(Json(event))
}

/// `PUT /api/v1/events/{id}`
///
/// The time window is revalidated against the merged row so a partial
/// update cannot invert it.
pub async fn update_event(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    if let Some(title) = &input.title {
        require_non_empty(title, "title")?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let current = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;
    let merged_start = input.starts_at.unwrap_or(current.starts_at);
    let merged_end = input.ends_at.or(current.ends_at);
    check_window(merged_start, merged_end)?;

    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Event", id })?;
    tracing::info!(event_id = id, user_id = user.user_id, "Event updated");
    Ok(Json(event))
}

/// `DELETE /api/v1/events/{id}`
pub async fn delete_event(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Event", id }));
    }
    tracing::info!(event_id = id, user_id = user.user_id, "Event deleted");
    Ok(StatusCode::NO_CONTENT)
}
