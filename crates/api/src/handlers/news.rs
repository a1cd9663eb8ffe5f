//! News article CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use unipas_core::error::CoreError;
use unipas_core::types::DbId;
use unipas_db::models::news::{CreateNews, News, NewsListParams, UpdateNews};
use unipas_db::repositories::NewsRepo;

use super::{check_include_inactive, require_non_empty, resolve_slug, validate_slug};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

/// `POST /api/v1/news`
pub async fn create_news(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateNews>,
) -> AppResult<(StatusCode, Json<News>)> {
    require_non_empty(&input.title, "title")?;
    require_non_empty(&input.content, "content")?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;

    let article = NewsRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(news_id = article.id, user_id = user.user_id, "News article created");
    Ok((StatusCode::CREATED, Json(article)))
}

/// `GET /api/v1/news`
pub async fn list_news(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<NewsListParams>,
) -> AppResult<Json<Vec<News>>> {
    check_include_inactive(params.include_inactive, &auth)?;
    let articles = NewsRepo::list(&state.pool, &params).await?;
    Ok(Json(articles))
}

/// `GET /api/v1/news/{id}`
pub async fn get_news(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<News>> {
    let article = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "News", id })?;
    Ok(Json(article))
}

/// `GET /api/v1/news/slug/{slug}`
///
/// Public article view. Each successful fetch counts as one view; the
/// returned row already carries the incremented count.
pub async fn get_news_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<News>> {
    let article = NewsRepo::find_by_slug_and_record_view(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::SlugNotFound {
            entity: "News",
            slug: slug.clone(),
        })?;
    Ok(Json(article))
}

/// `PUT /api/v1/news/{id}`
pub async fn update_news(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNews>,
) -> AppResult<Json<News>> {
    if let Some(title) = &input.title {
        require_non_empty(title, "title")?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let article = NewsRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "News", id })?;
    tracing::info!(news_id = id, user_id = user.user_id, "News article updated");
    Ok(Json(article))
}

/// `DELETE /api/v1/news/{id}`
pub async fn delete_news(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NewsRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "News", id }));
    }
    tracing::info!(news_id = id, user_id = user.user_id, "News article deleted");
    Ok(StatusCode::NO_CONTENT)
}
