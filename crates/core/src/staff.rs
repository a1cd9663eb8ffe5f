//! Staff role constants and association rules.
//!
//! A staff record is optionally tied to a faculty (dean) or a department
//! (head or lecturer). The role decides which foreign key is meaningful.

/// Faculty dean. Associated with a faculty, never a department.
pub const STAFF_ROLE_DEAN: &str = "dean";

/// Department head (Ketua Program Studi).
pub const STAFF_ROLE_HEAD: &str = "head";

/// Lecturer attached to a department.
pub const STAFF_ROLE_LECTURER: &str = "lecturer";

/// Administrative staff, not tied to an academic unit.
pub const STAFF_ROLE_STAFF: &str = "staff";

/// All accepted values for the `staff.role` column.
pub const STAFF_ROLES: &[&str] = &[
    STAFF_ROLE_DEAN,
    STAFF_ROLE_HEAD,
    STAFF_ROLE_LECTURER,
    STAFF_ROLE_STAFF,
];

/// Check whether `role` is one of the accepted staff roles.
pub fn is_valid_staff_role(role: &str) -> bool {
    STAFF_ROLES.contains(&role)
}

/// Validate a role against its unit references.
///
/// Returns a human-readable rejection when the combination is inconsistent:
/// a dean must reference a faculty and no department, while a head or
/// lecturer must reference a department.
pub fn validate_staff_association(
    role: &str,
    faculty_id: Option<i64>,
    department_id: Option<i64>,
) -> Result<(), String> {
    if !is_valid_staff_role(role) {
        return Err(format!(
            "Unknown staff role '{role}'. Expected one of: {}",
            STAFF_ROLES.join(", ")
        ));
    }

    match role {
        STAFF_ROLE_DEAN => {
            if faculty_id.is_none() {
                return Err("A dean must be associated with a faculty".into());
            }
            if department_id.is_some() {
                return Err("A dean cannot be associated with a department".into());
            }
        }
        STAFF_ROLE_HEAD | STAFF_ROLE_LECTURER => {
            if department_id.is_none() {
                return Err(format!("A {role} must be associated with a department"));
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_accepted() {
        for role in STAFF_ROLES {
            assert!(is_valid_staff_role(role));
        }
        assert!(!is_valid_staff_role("rector"));
    }

    #[test]
    fn test_dean_requires_faculty() {
        assert!(validate_staff_association(STAFF_ROLE_DEAN, Some(1), None).is_ok());
        assert!(validate_staff_association(STAFF_ROLE_DEAN, None, None).is_err());
        assert!(validate_staff_association(STAFF_ROLE_DEAN, Some(1), Some(2)).is_err());
    }

    #[test]
    fn test_head_and_lecturer_require_department() {
        assert!(validate_staff_association(STAFF_ROLE_HEAD, None, Some(3)).is_ok());
        assert!(validate_staff_association(STAFF_ROLE_LECTURER, Some(1), Some(3)).is_ok());
        assert!(validate_staff_association(STAFF_ROLE_HEAD, None, None).is_err());
    }

    #[test]
    fn test_plain_staff_needs_no_unit() {
        assert!(validate_staff_association(STAFF_ROLE_STAFF, None, None).is_ok());
    }
}
