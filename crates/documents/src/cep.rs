//! CEP (Código de Endereçamento Postal) validation and formatting

use brazilian_utils_core::{extract_digits, is_blank, DocumentKind};
use tracing::debug;

use crate::format::{apply_pattern, CEP_PATTERN};

/// Check whether a CEP has exactly 8 digits once punctuation is removed
pub fn is_valid(value: Option<&str>) -> bool {
    if is_blank(value) {
        return false;
    }

    let digits = extract_digits(value.unwrap_or_default());
    if !DocumentKind::Cep.lengths().contains(&digits.len()) {
        debug!(digits_found = digits.len(), "Invalid CEP length");
        return false;
    }

    true
}

/// Format a CEP as `DDDDD-DDD`
pub fn format(value: &str) -> String {
    apply_pattern(value, CEP_PATTERN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(is_valid(Some("92500-000")));
        assert!(is_valid(Some("92500000")));
    }

    #[test]
    fn test_is_valid_rejects() {
        assert!(!is_valid(None));
        assert!(!is_valid(Some("")));
        assert!(!is_valid(Some("   ")));
        assert!(!is_valid(Some("123456789")));
        assert!(!is_valid(Some("1234567")));
    }

    #[test]
    fn test_format() {
        assert_eq!(format("92500000"), "92500-000");
        assert_eq!(format("92500-000"), "92500-000");
        assert_eq!(format(""), "");
    }
}
