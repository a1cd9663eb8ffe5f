//! Route definitions for homepage hero sliders.
//!
//! Mounted at `/hero-sliders`.
//!
//! ```text
//! GET    /          list_hero_sliders (public, ordered by sort_order)
//! POST   /          create_hero_slider (editor)
//! GET    /{id}      get_hero_slider (auth)
//! PUT    /{id}      update_hero_slider (editor)
//! DELETE /{id}      delete_hero_slider (editor)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::hero_slider;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(hero_slider::list_hero_sliders).post(hero_slider::create_hero_slider),
        )
        .route(
            "/{id}",
            get(hero_slider::get_hero_slider)
                .put(hero_slider::update_hero_slider)
                .delete(hero_slider::delete_hero_slider),
        )
}
