//! Route definitions for departments.
//!
//! Mounted at `/departments`.
//!
//! ```text
//! GET    /                      list_departments (public)
//! POST   /                      create_department (editor)
//! GET    /slug/{slug}           get_department_by_slug (public)
//! GET    /{id}                  get_department (auth)
//! PUT    /{id}                  update_department (editor)
//! DELETE /{id}                  delete_department (editor)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::department;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(department::list_departments).post(department::create_department),
        )
        .route("/slug/{slug}", get(department::get_department_by_slug))
        .route(
            "/{id}",
            get(department::get_department)
                .put(department::update_department)
                .delete(department::delete_department),
        )
}
