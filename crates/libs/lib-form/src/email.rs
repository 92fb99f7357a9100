//! # Email Format
//!
//! A deliberately loose shape check: something, `@`, something, `.`,
//! something, with no whitespace and no second `@`. Anything stricter
//! belongs on the server.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Check that `email` looks like `local@domain.tld`.
///
/// # Examples
///
/// ```rust
/// use lib_form::is_valid_email;
///
/// assert!(is_valid_email("alice@example.com"));
/// assert!(!is_valid_email("a@b"));
/// assert!(!is_valid_email("a b@c.d"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
