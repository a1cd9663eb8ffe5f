//! Integration tests for admin user management and role gating.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, editor_token, get_auth, post_json, post_json_auth, put_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_creates_and_lists_users(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        serde_json::json!({
            "username": "content-editor",
            "email": "editor@unipas.ac.id",
            "password": "a-strong-password",
            "role": "editor"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["role"], "editor");
    assert!(created["password_hash"].is_null());

    let app = common::build_test_app(pool);
    let users = body_json(get_auth(app, "/api/v1/admin/users", &token).await).await;
    // The seeded admin plus the new editor.
    assert_eq!(users.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_editor_cannot_manage_users(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_weak_password_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        serde_json::json!({
            "username": "weak",
            "email": "weak@unipas.ac.id",
            "password": "short",
            "role": "editor"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_role_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        serde_json::json!({
            "username": "odd",
            "email": "odd@unipas.ac.id",
            "password": "a-strong-password",
            "role": "superuser"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deactivation_revokes_sessions(pool: PgPool) {
    let admin = admin_token(&pool).await;
    common::seed_user(&pool, "bob", "a-long-test-password", "editor").await;

    // Bob logs in and holds a refresh token.
    let app = common::build_test_app(pool.clone());
    let login = body_json(
        post_json(
            app,
            "/api/v1/auth/login",
            serde_json::json!({"username": "bob", "password": "a-long-test-password"}),
        )
        .await,
    )
    .await;
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();
    let bob_id = login["user"]["id"].as_i64().unwrap();

    // Admin deactivates the account.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/users/{bob_id}"),
        serde_json::json!({"is_active": false}),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["is_active"], false);

    // The refresh token no longer works.
    let app = common::build_test_app(pool.clone());
    let refresh = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(refresh.status(), StatusCode::UNAUTHORIZED);

    // Neither does a fresh login.
    let app = common::build_test_app(pool);
    let relogin = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "bob", "password": "a-long-test-password"}),
    )
    .await;
    assert_eq!(relogin.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_password_reset_invalidates_old_password(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let bob_id = common::seed_user(&pool, "bob", "old-password-123", "editor").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/users/{bob_id}/reset-password"),
        serde_json::json!({"password": "new-password-456"}),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let old = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "bob", "password": "old-password-123"}),
    )
    .await;
    assert_eq!(old.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let new = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({"username": "bob", "password": "new-password-456"}),
    )
    .await;
    assert_eq!(new.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_username_is_409(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        serde_json::json!({
            "username": "admin",
            "email": "other@unipas.ac.id",
            "password": "a-strong-password",
            "role": "editor"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
