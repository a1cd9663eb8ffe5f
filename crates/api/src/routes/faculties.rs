//! Route definitions for faculties.
//!
//! Mounted at `/faculties`.
//!
//! ```text
//! GET    /                      list_faculties (public)
//! POST   /                      create_faculty (editor)
//! GET    /slug/{slug}           get_faculty_by_slug (public)
//! GET    /{id}                  get_faculty (auth)
//! PUT    /{id}                  update_faculty (editor)
//! DELETE /{id}                  delete_faculty (editor)
//! GET    /{id}/departments      list_faculty_departments (public)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::faculty;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faculty::list_faculties).post(faculty::create_faculty))
        .route("/slug/{slug}", get(faculty::get_faculty_by_slug))
        .route(
            "/{id}",
            get(faculty::get_faculty)
                .put(faculty::update_faculty)
                .delete(faculty::delete_faculty),
        )
        .route("/{id}/departments", get(faculty::list_faculty_departments))
}
