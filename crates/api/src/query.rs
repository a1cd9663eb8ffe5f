//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for list endpoints that support an `include_inactive`
/// flag (admin views of content that is hidden from the public site).
///
/// Entity-specific list params (news, journals, videos, staff) embed the
/// flag themselves; this struct serves the simpler list endpoints.
#[derive(Debug, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}
