//! Boleto (bank payment slip) validation
//!
//! A boleto is printed as a 44-digit barcode or typed as a 47-digit
//! "digitable line". The digitable line reorders the barcode fields and adds
//! a Mod-10 check digit to each of its first three blocks.
//!
//! Layout reference: FEBRABAN "Layout - Código de Barras", version 5.

use std::ops::Range;

use brazilian_utils_core::checksum::{boleto_mod11, mod10};
use brazilian_utils_core::{extract_digits, DocumentError, DocumentKind};
use serde::Serialize;
use tracing::debug;

use crate::engine::{DocumentEngine, Validator};

pub const BARCODE_LENGTH: usize = 44;
pub const DIGITABLE_LINE_LENGTH: usize = 47;

/// Index of the Mod-11 check digit inside the barcode
const BARCODE_CHECK_DIGIT_POSITION: usize = 4;

/// Digitable-line blocks: (check digit index, digits covered)
const DIGITABLE_LINE_BLOCKS: [(usize, Range<usize>); 3] = [(9, 0..9), (20, 10..20), (31, 21..31)];

/// Digitable-line slices concatenated, in order, to rebuild the barcode
const BARCODE_SEGMENTS: [Range<usize>; 5] = [0..4, 32..47, 4..9, 10..20, 21..31];

/// A boleto that passed validation, held in 44-digit barcode form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Boleto(String);

impl_validating_deserialize!(Boleto);

impl Boleto {
    /// The 44-digit barcode
    pub fn barcode(&self) -> &str {
        &self.0
    }

    /// Issuing bank code (first 3 digits)
    pub fn bank_code(&self) -> &str {
        &self.0[..3]
    }

    /// Barcode-level Mod-11 check digit
    pub fn check_digit(&self) -> u32 {
        self.0
            .chars()
            .nth(BARCODE_CHECK_DIGIT_POSITION)
            .and_then(|c| c.to_digit(10))
            .unwrap_or_default()
    }
}

impl DocumentEngine for Boleto {
    const KIND: DocumentKind = DocumentKind::Boleto;
    const REJECT_REPEATED: bool = false;

    fn verify(digits: &[u32]) -> Result<(), DocumentError> {
        let barcode: Vec<u32> = if digits.len() == DIGITABLE_LINE_LENGTH {
            verify_blocks(digits)?;
            BARCODE_SEGMENTS
                .iter()
                .flat_map(|segment| digits[segment.clone()].iter().copied())
                .collect()
        } else {
            digits.to_vec()
        };

        let mut payload = barcode;
        let found = payload.remove(BARCODE_CHECK_DIGIT_POSITION);
        let expected = boleto_mod11(&payload);

        if found != expected {
            debug!(expected = expected, got = found, "Boleto check digit invalid");
            return Err(DocumentError::CheckDigitMismatch {
                kind: DocumentKind::Boleto,
                position: BARCODE_CHECK_DIGIT_POSITION,
                expected,
                found,
            });
        }

        Ok(())
    }

    fn from_verified(digits: String) -> Self {
        if digits.len() == DIGITABLE_LINE_LENGTH {
            Self(rearrange(&digits))
        } else {
            Self(digits)
        }
    }
}

impl std::fmt::Display for Boleto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Boleto {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Boleto validator with required/optional configuration
pub type BoletoValidator = Validator<Boleto>;

/// Check the three Mod-10 block digits of a digitable line
fn verify_blocks(digits: &[u32]) -> Result<(), DocumentError> {
    for (block, (check_position, range)) in DIGITABLE_LINE_BLOCKS.iter().enumerate() {
        let expected = mod10(&digits[range.clone()]);
        let found = digits[*check_position];

        if found != expected {
            debug!(
                block = block + 1,
                expected = expected,
                got = found,
                "Boleto digitable line block invalid"
            );
            return Err(DocumentError::BlockCheckMismatch {
                block: block + 1,
                expected,
                found,
            });
        }
    }

    Ok(())
}

/// Reorder a 47-digit digitable line into the 44-digit barcode layout
fn rearrange(line: &str) -> String {
    BARCODE_SEGMENTS
        .iter()
        .map(|segment| &line[segment.clone()])
        .collect()
}

/// Convert a digitable line to its barcode, without validating it
///
/// Returns `None` unless the input holds exactly 47 digits.
pub fn digitable_line_to_barcode(value: &str) -> Option<String> {
    let digits = extract_digits(value);
    (digits.len() == DIGITABLE_LINE_LENGTH).then(|| rearrange(&digits))
}

/// Check whether a boleto barcode or digitable line is valid
pub fn is_valid(value: Option<&str>, is_required: bool) -> bool {
    Boleto::is_valid(value, is_required)
}
