//! Route definitions for academic journals.
//!
//! Mounted at `/journals`.
//!
//! ```text
//! GET    /                   list_journals (public; search/category/faculty/year)
//! POST   /                   create_journal (editor)
//! GET    /slug/{slug}        get_journal_by_slug (public)
//! GET    /{id}               get_journal (auth)
//! PUT    /{id}               update_journal (editor)
//! DELETE /{id}               delete_journal (editor)
//! POST   /{id}/download      record_journal_download (public)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::journal;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(journal::list_journals).post(journal::create_journal))
        .route("/slug/{slug}", get(journal::get_journal_by_slug))
        .route(
            "/{id}",
            get(journal::get_journal)
                .put(journal::update_journal)
                .delete(journal::delete_journal),
        )
        .route("/{id}/download", post(journal::record_journal_download))
}
