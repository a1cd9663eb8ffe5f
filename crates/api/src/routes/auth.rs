//! Route definitions for authentication.
//!
//! Mounted at `/auth`.
//!
//! ```text
//! POST /login        login (public)
//! POST /refresh      refresh (public; rotates the refresh token)
//! POST /logout       logout (auth)
//! GET  /me           me (auth)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}
