//! Integration tests for the multipart upload endpoint.

mod common;

use std::io::Cursor;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use common::{body_json, editor_token};
use sqlx::PgPool;
use tower::ServiceExt;

const BOUNDARY: &str = "unipas-test-boundary";

/// Encode a tiny PNG in memory.
fn tiny_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::new(width, height);
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("PNG encoding should succeed");
    buf
}

fn multipart_body(filename: &str, content_type: &str, payload: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(filename: &str, content_type: &str, payload: &[u8], token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/upload")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(multipart_body(filename, content_type, payload)))
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_png_returns_url_and_dimensions(pool: PgPool) {
    let token = editor_token(&pool).await;
    let png = tiny_png(2, 3);

    let app = common::build_test_app(pool);
    let response = app
        .oneshot(upload_request("photo.png", "image/png", &png, Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let url = json["data"]["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with(".png"));
    assert_eq!(json["data"]["width"], 2);
    assert_eq!(json["data"]["height"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_rejects_unknown_extension(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = app
        .oneshot(upload_request(
            "script.sh",
            "text/plain",
            b"#!/bin/sh\n",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_rejects_renamed_non_image(pool: PgPool) {
    let token = editor_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = app
        .oneshot(upload_request(
            "fake.png",
            "image/png",
            b"this is not a png",
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("image"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_requires_auth(pool: PgPool) {
    let png = tiny_png(1, 1);
    let app = common::build_test_app(pool);
    let response = app
        .oneshot(upload_request("photo.png", "image/png", &png, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
