//! Request handlers.
//!
//! One submodule per resource. Content handlers follow a single pattern:
//! public reads (list, fetch by slug), authenticated reads by id (admin
//! forms), and editor-gated mutations that delegate to the corresponding
//! repository in `unipas_db`, mapping errors via [`AppError`].

pub mod admission;
pub mod auth;
pub mod department;
pub mod event;
pub mod faculty;
pub mod hero_slider;
pub mod journal;
pub mod news;
pub mod staff;
pub mod upload;
pub mod users;
pub mod video;

use unipas_core::error::CoreError;
use unipas_core::slug::{is_valid_slug, slugify};

use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// Resolve the slug for a create operation.
///
/// An explicit slug is validated as-is; otherwise one is generated from
/// `source` (the entity title/name). Rejects titles that produce an empty
/// slug (e.g. punctuation only).
pub(crate) fn resolve_slug(explicit: Option<&str>, source: &str) -> Result<String, AppError> {
    match explicit {
        Some(slug) => {
            validate_slug(slug)?;
            Ok(slug.to_string())
        }
        None => {
            let generated = slugify(source);
            if generated.is_empty() {
                return Err(AppError::Core(CoreError::Validation(format!(
                    "Cannot derive a slug from '{source}'"
                ))));
            }
            Ok(generated)
        }
    }
}

/// Reject a malformed caller-supplied slug (update path).
pub(crate) fn validate_slug(slug: &str) -> Result<(), AppError> {
    if !is_valid_slug(slug) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid slug '{slug}': lowercase alphanumerics and single dashes only"
        ))));
    }
    Ok(())
}

/// Reject an empty or whitespace-only required text field.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} must not be empty"
        ))));
    }
    Ok(())
}

/// Gate the `include_inactive` flag behind authentication.
///
/// Public callers always see active content only; admin views pass the
/// flag together with a Bearer token.
pub(crate) fn check_include_inactive(
    include_inactive: bool,
    auth: &Option<AuthUser>,
) -> Result<(), AppError> {
    if include_inactive && auth.is_none() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Authentication required to list inactive content".into(),
        )));
    }
    Ok(())
}
