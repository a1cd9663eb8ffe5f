//! Academic journal CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use unipas_core::error::CoreError;
use unipas_core::types::DbId;
use unipas_db::models::journal::{CreateJournal, Journal, JournalListParams, UpdateJournal};
use unipas_db::repositories::{FacultyRepo, JournalRepo};

use super::{check_include_inactive, require_non_empty, resolve_slug, validate_slug};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// `POST /api/v1/journals`
pub async fn create_journal(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateJournal>,
) -> AppResult<(StatusCode, Json<Journal>)> {
    require_non_empty(&input.title, "title")?;
    require_non_empty(&input.authors, "authors")?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;

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

    let journal = JournalRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(journal_id = journal.id, user_id = user.user_id, "Journal created");
    Ok((StatusCode::CREATED, Json(journal)))
}

/// `GET /api/v1/journals`
pub async fn list_journals(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<JournalListParams>,
) -> AppResult<Json<Vec<Journal>>> {
    check_include_inactive(params.include_inactive, &auth)?;
    let journals = JournalRepo::list(&state.pool, &params).await?;
    Ok(Json(journals))
}

/// `GET /api/v1/journals/{id}`
pub async fn get_journal(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Journal>> {
    let journal = JournalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Journal",
            id,
        })?;
    Ok(Json(journal))
}

/// `GET /api/v1/journals/slug/{slug}`
pub async fn get_journal_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Journal>> {
    let journal = JournalRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::SlugNotFound {
            entity: "Journal",
            slug: slug.clone(),
        })?;
    Ok(Json(journal))
}

/// `POST /api/v1/journals/{id}/download`
///
/// Public. Records one download and returns the row with the updated
/// counter; the client then follows `pdf_url`.
pub async fn record_journal_download(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Journal>> {
    let journal = JournalRepo::record_download(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Journal",
            id,
        })?;
    Ok(Json(journal))
}

/// `PUT /api/v1/journals/{id}`
pub async fn update_journal(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJournal>,
) -> AppResult<Json<Journal>> {
    if let Some(title) = &input.title {
        require_non_empty(title, "title")?;
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

    let journal = JournalRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Journal",
            id,
        })?;
    tracing::info!(journal_id = id, user_id = user.user_id, "Journal updated");
    Ok(Json(journal))
}

/// `DELETE /api/v1/journals/{id}`
pub async fn delete_journal(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = JournalRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Journal",
            id,
        }));
    }
    tracing::info!(journal_id = id, user_id = user.user_id, "Journal deleted");
    Ok(StatusCode::NO_CONTENT)
}
