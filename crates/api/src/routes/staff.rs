//! Route definitions for staff records.
//!
//! Mounted at `/staff`.
//!
//! ```text
//! GET    /          list_staff (public; role/unit filters)
//! POST   /          create_staff (editor)
//! GET    /{id}      get_staff (auth)
//! PUT    /{id}      update_staff (editor)
//! DELETE /{id}      delete_staff (editor)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::staff;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(staff::list_staff).post(staff::create_staff))
        .route(
            "/{id}",
            get(staff::get_staff)
                .put(staff::update_staff)
                .delete(staff::delete_staff),
        )
}
