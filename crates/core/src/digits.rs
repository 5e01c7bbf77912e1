//! Digit extraction
//!
//! Every validator and formatter starts by reducing free-form input to its
//! decimal digits. Punctuation, whitespace, letters and any non-ASCII
//! character are dropped.

/// Strip every character that is not an ASCII digit, preserving order
///
/// Handles various input formats:
/// - "123.456.789-00"
/// - " 123 456 789 00 "
/// - "0019000009 01149.718601 68524.522114 6 75860000102656"
pub fn extract_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Numeric values of a digit string
///
/// Non-digit characters are skipped, so passing raw input is equivalent to
/// passing `extract_digits(input)`.
pub fn digit_values(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Check whether every digit in the sequence is the same
pub fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Absent, empty or whitespace-only input
pub fn is_blank(input: Option<&str>) -> bool {
    input.map_or(true, |s| s.trim().is_empty())
}
