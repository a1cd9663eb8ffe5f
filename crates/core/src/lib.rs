//! Shared domain types for the Universitas Pasifik Morotai CMS backend.
//!
//! Holds everything the db and api crates both need: ID/timestamp aliases,
//! the domain error enum, role constants, and slug handling.

pub mod error;
pub mod roles;
pub mod slug;
pub mod staff;
pub mod types;
