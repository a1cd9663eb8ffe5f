//! User role names.
//!
//! Stored in the `roles` table and embedded in JWT claims. Admins manage
//! users and all content; editors manage content only.

/// Full access: user administration plus all content operations.
pub const ROLE_ADMIN: &str = "admin";

/// Content access: CRUD on every content entity, no user administration.
pub const ROLE_EDITOR: &str = "editor";

/// All known role names, in privilege order.
pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR];
