pub mod admin_users;
pub mod admissions;
pub mod auth;
pub mod departments;
pub mod events;
pub mod faculties;
pub mod health;
pub mod hero_sliders;
pub mod journals;
pub mod news;
pub mod staff;
pub mod videos;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (auth)
/// /auth/me                         current user (auth)
///
/// /faculties                       list, create
/// /faculties/slug/{slug}           public detail
/// /faculties/{id}                  get, update, delete
/// /faculties/{id}/departments      departments of a faculty
///
/// /departments                     list, create
/// /departments/slug/{slug}         public detail
/// /departments/{id}                get, update, delete
///
/// /staff                           list (role/unit filters), create
/// /staff/{id}                      get, update, delete
///
/// /news                            list (search/filters), create
/// /news/slug/{slug}                public detail (counts a view)
/// /news/{id}                       get, update, delete
///
/// /events                          list (upcoming/featured), create
/// /events/slug/{slug}              public detail
/// /events/{id}                     get, update, delete
///
/// /admissions                      list, create
/// /admissions/slug/{slug}          public detail
/// /admissions/{id}                 get, update, delete
///
/// /journals                        list (search/filters), create
/// /journals/slug/{slug}            public detail
/// /journals/{id}                   get, update, delete
/// /journals/{id}/download          record a download (public)
///
/// /videos                          list (search/filters), create
/// /videos/{id}                     get, update, delete
/// /videos/{id}/view                record a view (public)
///
/// /hero-sliders                    list, create
/// /hero-sliders/{id}               get, update, delete
///
/// /admin/users                     list, create (admin only)
/// /admin/users/{id}                get, update
/// /admin/users/{id}/reset-password reset password
///
/// /upload                          multipart file upload (editor)
/// ```
///
/// Mutations are editor-gated via extractors inside the handlers, so the
/// same resource router serves both the public site and the admin panel.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/faculties", faculties::router())
        .nest("/departments", departments::router())
        .nest("/staff", staff::router())
        .nest("/news", news::router())
        .nest("/events", events::router())
        .nest("/admissions", admissions::router())
        .nest("/journals", journals::router())
        .nest("/videos", videos::router())
        .nest("/hero-sliders", hero_sliders::router())
        .nest("/admin/users", admin_users::router())
        .route("/upload", post(handlers::upload::upload_file))
}
