//! Email address validation

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$")
        .expect("email pattern is a valid regex")
});

/// Check whether a value looks like `local@domain.tld`
///
/// Only ASCII letters, digits and `_ . -` are accepted in the local part.
pub fn is_valid(value: Option<&str>) -> bool {
    match value {
        Some(email) if !email.trim().is_empty() => EMAIL_PATTERN.is_match(email),
        _ => false,
    }
}
