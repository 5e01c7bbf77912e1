//! Brazilian phone number validation
//!
//! A number is a two-digit DDD area code followed by an 8-digit landline or
//! a 9-digit mobile number. Landlines start with 2-5, mobiles with 6-9.

use brazilian_utils_core::{digit_values, extract_digits, is_blank};
use tracing::debug;

/// DDD area codes in use
pub static AREA_CODES: [u32; 67] = [
    11, 12, 13, 14, 15, 16, 17, 18, 19, 21, 22, 24, 27, 28, 31, 32, 33, 34, 35, 37, 38, 41, 42,
    43, 44, 45, 46, 47, 48, 49, 51, 53, 54, 55, 61, 62, 63, 64, 65, 66, 67, 68, 69, 71, 73, 74,
    75, 77, 79, 81, 82, 83, 84, 85, 86, 87, 88, 89, 91, 92, 93, 94, 95, 96, 97, 98, 99,
];

const LANDLINE_LENGTH: usize = 10;
const MOBILE_LENGTH: usize = 11;

const LANDLINE_PREFIXES: [u32; 4] = [2, 3, 4, 5];
const MOBILE_PREFIXES: [u32; 4] = [6, 7, 8, 9];

/// Check whether a value is a valid landline or mobile number with DDD
pub fn is_valid(value: Option<&str>) -> bool {
    if is_blank(value) {
        return false;
    }
    let digits = digit_values(&extract_digits(value.unwrap_or_default()));

    let prefixes = match digits.len() {
        LANDLINE_LENGTH => &LANDLINE_PREFIXES,
        MOBILE_LENGTH => &MOBILE_PREFIXES,
        found => {
            debug!(digits_found = found, "Invalid phone length");
            return false;
        }
    };

    let area_code = digits[0] * 10 + digits[1];
    if !AREA_CODES.contains(&area_code) {
        debug!(area_code = area_code, "Unknown DDD area code");
        return false;
    }

    prefixes.contains(&digits[2])
}
