//! Rules for the public `personalLink` slug.
//!
//! The slug is used verbatim as the last path segment of a visitor URL, so it
//! is restricted to a URL-path-safe alphabet and may not shadow a route the
//! application serves itself.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a personal link in characters.
pub const MAX_PERSONAL_LINK_LENGTH: u64 = 64;

/// Allowed characters: ASCII letters, digits, hyphen, underscore.
pub const PERSONAL_LINK_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

/// Compiled slug pattern, shared with the `validator` derive on patch DTOs.
pub static PERSONAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PERSONAL_LINK_PATTERN).expect("valid regex"));

/// Path segments owned by the application itself.
pub const RESERVED_PERSONAL_LINKS: &[&str] = &[
    "admin", "api", "health", "login", "logout", "static", "_next",
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Whether `slug` could ever name a stored page.
///
/// Used on the read path to short-circuit lookups for path segments that
/// can never have been accepted on the write path.
pub fn is_well_formed(slug: &str) -> bool {
    validate_personal_link(slug).is_ok()
}

/// Whether `slug` collides with a reserved route segment (case-insensitive).
pub fn is_reserved(slug: &str) -> bool {
    RESERVED_PERSONAL_LINKS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(slug))
}

/// Validate a personal link, returning a human-readable error.
pub fn validate_personal_link(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation(
            "personalLink must not be empty".to_string(),
        ));
    }
    if slug.len() as u64 > MAX_PERSONAL_LINK_LENGTH {
        return Err(CoreError::Validation(format!(
            "personalLink exceeds maximum length of {MAX_PERSONAL_LINK_LENGTH} characters"
        )));
    }
    if !PERSONAL_LINK_RE.is_match(slug) {
        return Err(CoreError::Validation(format!(
            "personalLink '{slug}' may only contain letters, digits, '-' and '_'"
        )));
    }
    if is_reserved(slug) {
        return Err(CoreError::Validation(format!(
            "personalLink '{slug}' is reserved"
        )));
    }
    Ok(())
}

/// `validator` custom rule rejecting reserved slugs.
pub fn validate_not_reserved(slug: &str) -> Result<(), ValidationError> {
    if is_reserved(slug) {
        let mut err = ValidationError::new("reserved");
        err.message = Some(format!("personalLink '{slug}' is reserved").into());
        return Err(err);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
