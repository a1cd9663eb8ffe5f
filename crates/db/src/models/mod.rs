//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//! - Query parameter structs for list endpoints that support filtering

pub mod admission;
pub mod department;
pub mod event;
pub mod faculty;
pub mod hero_slider;
pub mod journal;
pub mod news;
pub mod role;
pub mod session;
pub mod staff;
pub mod user;
pub mod video;
