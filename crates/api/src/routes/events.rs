//! Route definitions for campus events.
//!
//! Mounted at `/events`.
//!
//! ```text
//! GET    /                 list_events (public; upcoming/featured filters)
//! POST   /                 create_event (editor)
//! GET    /slug/{slug}      get_event_by_slug (public)
//! GET    /{id}             get_event (auth)
//! PUT    /{id}             update_event (editor)
//! DELETE /{id}             delete_event (editor)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list_events).post(event::create_event))
        .route("/slug/{slug}", get(event::get_event_by_slug))
        .route(
            "/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
}
