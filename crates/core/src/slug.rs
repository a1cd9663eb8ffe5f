//! Slug generation and validation.
//!
//! Every public content entity (faculty, department, news, event, admission,
//! journal) is addressed by a URL slug. Slugs are generated from the entity
//! title when the admin form leaves the field empty, and validated when
//! supplied explicitly. Uniqueness is enforced by the database (`uq_*_slug`
//! constraints), not here.

/// Maximum slug length. Matches the `VARCHAR(160)` columns in the schema.
pub const MAX_SLUG_LEN: usize = 160;

/// Derive a slug from a human-readable title.
///
/// Lowercases, replaces every non-alphanumeric run with a single `-`, and
/// trims leading/trailing dashes. Non-ASCII characters are dropped rather
/// than transliterated. The result is truncated to [`MAX_SLUG_LEN`] on a
/// dash boundary where possible.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true; // suppress a leading dash

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        if let Some(idx) = slug.rfind('-') {
            slug.truncate(idx);
        }
    }

    slug
}

/// Check whether a caller-supplied slug is well-formed.
///
/// Valid slugs are non-empty, at most [`MAX_SLUG_LEN`] characters, and
/// consist of lowercase ASCII alphanumeric segments separated by single
/// dashes (no leading, trailing, or doubled dashes).
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return false;
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Fakultas Ilmu Alam"), "fakultas-ilmu-alam");
        assert_eq!(slugify("  Penerimaan 2026/2027  "), "penerimaan-2026-2027");
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("Seminar -- Nasional!"), "seminar-nasional");
        assert_eq!(slugify("S1 - Teknik Informatika"), "s1-teknik-informatika");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        // Non-ASCII letters are dropped, not transliterated.
        assert_eq!(slugify("Café Morotai"), "caf-morotai");
    }

    #[test]
    fn test_slugify_empty_and_symbols_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_truncates_on_dash_boundary() {
        let long = "kata ".repeat(50);
        let slug = slugify(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
        assert!(is_valid_slug(&slug));
    }

    #[test]
    fn test_valid_slug_accepts_generated() {
        for title in ["Berita Kampus", "Jalur Mandiri 2026", "a"] {
            assert!(is_valid_slug(&slugify(title)), "title: {title}");
        }
    }

    #[test]
    fn test_valid_slug_rejects_malformed() {
        for bad in ["", "-lead", "trail-", "dou--ble", "UPPER", "with space", "ünïcode"] {
            assert!(!is_valid_slug(bad), "slug: {bad}");
        }
    }
}
