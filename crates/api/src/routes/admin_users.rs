//! Route definitions for admin user management.
//!
//! Mounted at `/admin/users`. Every handler requires the `admin` role.
//!
//! ```text
//! GET  /                          list_users
//! POST /                          create_user
//! GET  /{id}                      get_user
//! PUT  /{id}                      update_user
//! POST /{id}/reset-password       reset_password
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/{id}", get(users::get_user).put(users::update_user))
        .route("/{id}/reset-password", post(users::reset_password))
}
