//! Refresh-token session models.

use serde::Serialize;
use sqlx::FromRow;
use unipas_core::types::{DbId, Timestamp};

/// A row from the `sessions` table. One row per issued refresh token;
/// only the SHA-256 hash of the token is stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
