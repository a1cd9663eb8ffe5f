//! File upload handler for the admin panel.
//!
//! Accepts a single multipart field named `file`, stores it under the
//! configured upload directory with a generated name, and returns the
//! public URL. Images are decoded server-side, so a renamed non-image
//! cannot slip through, and the response carries pixel dimensions for
//! the admin preview.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use image::GenericImageView;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Accepted image extensions (decoded for validation).
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Accepted non-image extensions (stored as-is).
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf"];

#[derive(Debug, Serialize)]
pub struct UploadResult {
    /// Public URL under `/uploads/`.
    pub url: String,
    /// Generated file name on disk.
    pub filename: String,
    pub size_bytes: usize,
    /// Pixel width, for image uploads.
    pub width: Option<u32>,
    /// Pixel height, for image uploads.
    pub height: Option<u32>,
}

/// `POST /api/v1/upload`
pub async fn upload_file(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResult>>)> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
        .ok_or_else(|| AppError::BadRequest("Missing 'file' field".into()))?;

    if field.name() != Some("file") {
        return Err(AppError::BadRequest(
            "Expected a single multipart field named 'file'".into(),
        ));
    }

    let original_name = field
        .file_name()
        .map(str::to_owned)
        .ok_or_else(|| AppError::BadRequest("Uploaded field carries no file name".into()))?;

    let extension = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .ok_or_else(|| AppError::BadRequest("File name has no extension".into()))?;

    let is_image = IMAGE_EXTENSIONS.contains(&extension.as_str());
    if !is_image && !DOCUMENT_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported file type '.{extension}'"
        )));
    }

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if data.len() > state.config.upload_max_bytes {
        return Err(AppError::BadRequest(format!(
            "File exceeds the {} byte limit",
            state.config.upload_max_bytes
        )));
    }

    let (width, height) = if is_image {
        // Decoding a multi-megabyte image is CPU-bound, keep it off the
        // async workers.
        let bytes = data.clone();
        let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .map_err(|e| AppError::InternalError(format!("Image decode task failed: {e}")))?
            .map_err(|e| AppError::BadRequest(format!("Not a valid image: {e}")))?;
        let (w, h) = decoded.dimensions();
        (Some(w), Some(h))
    } else {
        (None, None)
    };

    let filename = format!("{}.{extension}", Uuid::new_v4());
    let dir = std::path::Path::new(&state.config.upload_dir);
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
    tokio::fs::write(dir.join(&filename), &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(
        user_id = user.user_id,
        filename = %filename,
        size_bytes = data.len(),
        "File uploaded"
    );

    let result = UploadResult {
        url: format!("/uploads/{filename}"),
        filename,
        size_bytes: data.len(),
        width,
        height,
    };
    Ok((StatusCode::CREATED, Json(DataResponse::new(result))))
}
