//! Integration tests for journals and the video gallery, including the
//! public download/view counters.

mod common;

use axum::http::StatusCode;
use common::{body_json, editor_token, get, post_empty, post_json_auth};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_journal_download_counter(pool: PgPool) {
    let token = editor_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let journal = body_json(
        post_json_auth(
            app,
            "/api/v1/journals",
            serde_json::json!({
                "title": "Pengelolaan Pesisir Morotai",
                "authors": "A. Rahman, B. Sari",
                "year": 2025,
                "pdf_url": "/uploads/jurnal-pesisir.pdf"
            }),
            &token,
        )
        .await,
    )
    .await;
    let id = journal["id"].as_i64().unwrap();
    assert_eq!(journal["download_count"], 0);

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/journals/{id}/download")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["download_count"], 1);

    let app = common::build_test_app(pool);
    let response = post_empty(app, &format!("/api/v1/journals/{id}/download")).await;
    assert_eq!(body_json(response).await["download_count"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_journal_filters(pool: PgPool) {
    let token = editor_token(&pool).await;

    for (title, year, category) in [
        ("Studi Terumbu Karang", 2024, "perikanan"),
        ("Ekonomi Desa Pesisir", 2025, "ekonomi"),
        ("Budidaya Rumput Laut", 2025, "perikanan"),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/journals",
            serde_json::json!({
                "title": title,
                "authors": "Tim Peneliti",
                "year": year,
                "category": category
            }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    let by_year = body_json(get(app, "/api/v1/journals?year=2025").await).await;
    assert_eq!(by_year.as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let combined = body_json(get(app, "/api/v1/journals?year=2025&category=perikanan").await).await;
    assert_eq!(combined.as_array().unwrap().len(), 1);
    assert_eq!(combined[0]["title"], "Budidaya Rumput Laut");

    let app = common::build_test_app(pool);
    let by_text = body_json(get(app, "/api/v1/journals?q=karang").await).await;
    assert_eq!(by_text.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_video_view_counter(pool: PgPool) {
    let token = editor_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let video = body_json(
        post_json_auth(
            app,
            "/api/v1/videos",
            serde_json::json!({
                "title": "Profil Kampus",
                "youtube_url": "https://www.youtube.com/watch?v=abc123"
            }),
            &token,
        )
        .await,
    )
    .await;
    let id = video["id"].as_i64().unwrap();
    assert_eq!(video["view_count"], 0);

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, &format!("/api/v1/videos/{id}/view")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["view_count"], 1);

    let app = common::build_test_app(pool);
    let response = post_empty(app, "/api/v1/videos/999999/view").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_video_requires_youtube_url(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/videos",
        serde_json::json!({"title": "Tanpa URL", "youtube_url": "  "}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
