//! Punctuation templates
//!
//! Formatting is pure template substitution: the digits of the input fill
//! the `#` slots of a pattern, left to right. Input longer than the pattern
//! is truncated; shorter input is left-padded with zeros. Nothing is
//! validated, so a degenerate value still formats.

use brazilian_utils_core::extract_digits;

/// Placeholder for one digit in a pattern
pub const DIGIT_SLOT: char = '#';

pub const CPF_PATTERN: &str = "###.###.###-##";
pub const CNPJ_PATTERN: &str = "##.###.###/####-##";
pub const CEP_PATTERN: &str = "#####-###";

/// Fill `pattern` with the digits of `input`
///
/// Returns an empty string when the input holds no digits.
pub fn apply_pattern(input: &str, pattern: &str) -> String {
    let digits = extract_digits(input);
    if digits.is_empty() {
        return String::new();
    }

    let slots = pattern.chars().filter(|&c| c == DIGIT_SLOT).count();
    let padding = slots.saturating_sub(digits.len());
    let mut fill = std::iter::repeat('0')
        .take(padding)
        .chain(digits.chars().take(slots));

    pattern
        .chars()
        .map(|c| {
            if c == DIGIT_SLOT {
                fill.next().unwrap_or('0')
            } else {
                c
            }
        })
        .collect()
}
