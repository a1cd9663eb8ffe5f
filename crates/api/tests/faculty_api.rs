//! Integration tests for faculty and department endpoints: CRUD, slug
//! handling, the faculty/department hierarchy, and active-state gating.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, editor_token, get, post_json_auth, put_json_auth};
use sqlx::PgPool;

async fn create_faculty(pool: &PgPool, token: &str, name: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/faculties",
        serde_json::json!({"name": name}),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_faculty_generates_slug(pool: PgPool) {
    let token = editor_token(&pool).await;
    let faculty = create_faculty(&pool, &token, "Fakultas Ilmu Komputer").await;

    assert_eq!(faculty["slug"], "fakultas-ilmu-komputer");
    assert_eq!(faculty["is_active"], true);
    assert!(faculty["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_faculty_without_auth_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::post_json(
        app,
        "/api/v1/faculties",
        serde_json::json!({"name": "Fakultas Teknik"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_slug_is_409(pool: PgPool) {
    let token = editor_token(&pool).await;
    create_faculty(&pool, &token, "Fakultas Ekonomi").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/faculties",
        serde_json::json!({"name": "Fakultas Ekonomi"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_explicit_slug_is_400(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/faculties",
        serde_json::json!({"name": "Fakultas Hukum", "slug": "Not A Slug!"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_faculty_by_slug_is_public(pool: PgPool) {
    let token = editor_token(&pool).await;
    create_faculty(&pool, &token, "Fakultas Pertanian").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/faculties/slug/fakultas-pertanian").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Fakultas Pertanian");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_inactive_faculty_hidden_from_public(pool: PgPool) {
    let token = editor_token(&pool).await;
    let faculty = create_faculty(&pool, &token, "Fakultas Perikanan").await;
    let id = faculty["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/faculties/{id}"),
        serde_json::json!({"is_active": false}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Public list and slug lookup no longer see it.
    let app = common::build_test_app(pool.clone());
    let list = body_json(get(app, "/api/v1/faculties").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/faculties/slug/fakultas-perikanan").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Admin listing with include_inactive still does.
    let app = common::build_test_app(pool.clone());
    let response =
        common::get_auth(app, "/api/v1/faculties?include_inactive=true", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    // include_inactive without a token is rejected.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/faculties?include_inactive=true").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_department_crud_under_faculty(pool: PgPool) {
    let token = editor_token(&pool).await;
    let faculty = create_faculty(&pool, &token, "Fakultas Teknik").await;
    let faculty_id = faculty["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/departments",
        serde_json::json!({
            "faculty_id": faculty_id,
            "name": "Teknik Informatika",
            "degree": "S1"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let department = body_json(response).await;
    assert_eq!(department["slug"], "teknik-informatika");
    assert_eq!(department["faculty_id"], faculty_id);

    // Nested listing under the faculty.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/faculties/{faculty_id}/departments")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let departments = body_json(response).await;
    assert_eq!(departments.as_array().unwrap().len(), 1);
    assert_eq!(departments[0]["name"], "Teknik Informatika");

    // A faculty with departments cannot be deleted (RESTRICT).
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/faculties/{faculty_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "FOREIGN_KEY_VIOLATION");

    // Delete the department, then the faculty.
    let department_id = department["id"].as_i64().unwrap();
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/departments/{department_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/faculties/{faculty_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_department_with_missing_faculty_is_400(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/departments",
        serde_json::json!({"faculty_id": 424242, "name": "Orphan Department"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_departments_of_missing_faculty_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/faculties/999999/departments").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
