//! Route definitions for the video gallery.
//!
//! Mounted at `/videos`.
//!
//! ```text
//! GET    /               list_videos (public; search/category/featured)
//! POST   /               create_video (editor)
//! GET    /{id}           get_video (auth)
//! PUT    /{id}           update_video (editor)
//! DELETE /{id}           delete_video (editor)
//! POST   /{id}/view      record_video_view (public)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list_videos).post(video::create_video))
        .route(
            "/{id}",
            get(video::get_video)
                .put(video::update_video)
                .delete(video::delete_video),
        )
        .route("/{id}/view", post(video::record_video_view))
}
