//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight into the router via `tower::ServiceExt`,
//! no TCP listener involved. Each test gets its own database from
//! `#[sqlx::test]`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use unipas_api::auth::jwt::{generate_access_token, JwtConfig};
use unipas_api::auth::password::hash_password;
use unipas_api::config::ServerConfig;
use unipas_api::router::build_app_router;
use unipas_api::state::AppState;
use unipas_core::types::DbId;
use unipas_db::repositories::{RoleRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        upload_dir: std::env::temp_dir()
            .join("unipas-test-uploads")
            .to_string_lossy()
            .into_owned(),
        upload_max_bytes: 20 * 1024 * 1024,
        jwt: test_jwt_config(),
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-that-is-long-enough".to_string(),
        access_token_expiry_mins: 15,
        refresh_token_expiry_days: 7,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors the production setup in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert a user with the given role directly through the repositories.
/// Returns the new user's id.
pub async fn seed_user(pool: &PgPool, username: &str, password: &str, role: &str) -> DbId {
    let role_row = RoleRepo::find_by_name(pool, role)
        .await
        .expect("role lookup should succeed")
        .expect("role should be seeded by migrations");
    let hash = hash_password(password).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        username,
        &format!("{username}@test.unipas.ac.id"),
        &hash,
        role_row.id,
    )
    .await
    .expect("user insert should succeed");
    user.id
}

/// Generate a valid access token for the given user without going
/// through the login endpoint.
pub fn auth_token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, &test_jwt_config())
        .expect("token generation should succeed")
}

/// Seed an editor and return a ready-to-use Bearer token.
pub async fn editor_token(pool: &PgPool) -> String {
    let id = seed_user(pool, "editor", "editor-test-password", "editor").await;
    auth_token_for(id, "editor")
}

/// Seed an admin and return a ready-to-use Bearer token.
pub async fn admin_token(pool: &PgPool) -> String {
    let id = seed_user(pool, "admin", "admin-test-password", "admin").await;
    auth_token_for(id, "admin")
}

fn json_request(method: Method, uri: &str, body: serde_json::Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn bare_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(bare_request(Method::GET, uri, None)).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(bare_request(Method::GET, uri, Some(token)))
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(json_request(Method::POST, uri, body, None))
        .await
        .unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    app.oneshot(json_request(Method::POST, uri, body, Some(token)))
        .await
        .unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(bare_request(Method::POST, uri, None)).await.unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    app.oneshot(json_request(Method::PUT, uri, body, Some(token)))
        .await
        .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(json_request(Method::PUT, uri, body, None))
        .await
        .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(bare_request(Method::DELETE, uri, None))
        .await
        .unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(bare_request(Method::DELETE, uri, Some(token)))
        .await
        .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}
