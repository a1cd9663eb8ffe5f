//! Shared response envelope types for API handlers.
//!
//! Auxiliary endpoints (upload, counters) wrap their payload in a
//! `{ "data": ... }` envelope; entity CRUD returns the entity JSON
//! directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
