//! Route definitions for news articles.
//!
//! Mounted at `/news`.
//!
//! ```text
//! GET    /                 list_news (public; search/category/featured)
//! POST   /                 create_news (editor)
//! GET    /slug/{slug}      get_news_by_slug (public; counts a view)
//! GET    /{id}             get_news (auth)
//! PUT    /{id}             update_news (editor)
//! DELETE /{id}             delete_news (editor)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_news).post(news::create_news))
        .route("/slug/{slug}", get(news::get_news_by_slug))
        .route(
            "/{id}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
}
