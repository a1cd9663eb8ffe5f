//! Route definitions for admission tracks.
//!
//! Mounted at `/admissions`.
//!
//! ```text
//! GET    /                 list_admissions (public)
//! POST   /                 create_admission (editor)
//! GET    /slug/{slug}      get_admission_by_slug (public)
//! GET    /{id}             get_admission (auth)
//! PUT    /{id}             update_admission (editor)
//! DELETE /{id}             delete_admission (editor)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::admission;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(admission::list_admissions).post(admission::create_admission),
        )
        .route("/slug/{slug}", get(admission::get_admission_by_slug))
        .route(
            "/{id}",
            get(admission::get_admission)
                .put(admission::update_admission)
                .delete(admission::delete_admission),
        )
}
