//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation and formatting
//!
//! Brazilian company tax ID: an 8-digit root identifying the company, a
//! 4-digit branch number and two Mod-11 check digits.

use brazilian_utils_core::checksum::generate_checksum_with;
use brazilian_utils_core::{DocumentError, DocumentKind, Mod11Rule};
use serde::Serialize;
use tracing::debug;

use crate::engine::{DocumentEngine, Validator};
use crate::format::{apply_pattern, CNPJ_PATTERN};

/// Weights for the first check digit (positions 0..12)
pub static FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit (positions 0..13)
pub static SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

const ROOT_LENGTH: usize = 8;
const BRANCH_END: usize = 12;
const HEADQUARTERS_BRANCH: &str = "0001";

/// A CNPJ that passed check-digit validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Access the 14-digit canonical form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Punctuated form: `DD.DDD.DDD/DDDD-DD`
    pub fn formatted(&self) -> String {
        apply_pattern(&self.0, CNPJ_PATTERN)
    }

    /// Root CNPJ (first 8 digits, the company identifier)
    pub fn root(&self) -> &str {
        &self.0[..ROOT_LENGTH]
    }

    /// Branch number (4 digits after the root)
    pub fn branch(&self) -> &str {
        &self.0[ROOT_LENGTH..BRANCH_END]
    }

    /// Check if this is a headquarters CNPJ (branch = 0001)
    pub fn is_headquarters(&self) -> bool {
        self.branch() == HEADQUARTERS_BRANCH
    }

    /// Check if two CNPJs belong to the same company (same root)
    pub fn same_company(&self, other: &Cnpj) -> bool {
        self.root() == other.root()
    }
}

impl DocumentEngine for Cnpj {
    const KIND: DocumentKind = DocumentKind::Cnpj;
    const PATTERN: Option<&'static str> = Some(CNPJ_PATTERN);

    fn verify(digits: &[u32]) -> Result<(), DocumentError> {
        let passes: [&'static [u32]; 2] = [&FIRST_WEIGHTS, &SECOND_WEIGHTS];

        for weights in passes {
            let position = weights.len();
            let sum = generate_checksum_with(&digits[..position], weights);
            let expected = Mod11Rule::Standard.check_digit(sum);
            let found = digits[position];

            if found != expected {
                debug!(
                    position = position,
                    expected = expected,
                    got = found,
                    "CNPJ check digit invalid"
                );
                return Err(DocumentError::CheckDigitMismatch {
                    kind: DocumentKind::Cnpj,
                    position,
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }

    fn from_verified(digits: String) -> Self {
        Self(digits)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// CNPJ validator with required/optional configuration
pub type CnpjValidator = Validator<Cnpj>;

/// Check whether a CNPJ is valid
pub fn is_valid(value: Option<&str>, is_required: bool) -> bool {
    Cnpj::is_valid(value, is_required)
}

/// Format a CNPJ as `DD.DDD.DDD/DDDD-DD`
pub fn format(value: &str) -> String {
    apply_pattern(value, CNPJ_PATTERN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_known_cnpjs() {
        for cnpj in [
            "81.202.136/0001-86",
            "46.238.497/0001-81",
            "18240603000126",
            "77973689000165",
            "13723705000189",
        ] {
            assert!(is_valid(Some(cnpj), true), "CNPJ should be valid: {}", cnpj);
        }
    }

    #[test]
    fn test_is_valid_rejects_invalid() {
        for cnpj in [
            "123456",
            "11257245286",
            "abcabcabcde",
            "11111111111",
            "12312312312",
            "ababcabcabcdab",
            "11257245286531",
            "77973689000163",
            "77173389000163",
        ] {
            assert!(!is_valid(Some(cnpj), true), "CNPJ should be invalid: {}", cnpj);
        }
    }

    #[test]
    fn test_is_valid_rejects_same_digits() {
        for d in 0..=9 {
            let cnpj = d.to_string().repeat(14);
            assert!(!is_valid(Some(&cnpj), true), "{} should be rejected", cnpj);
        }
    }

    #[test]
    fn test_empty_input_depends_on_required() {
        assert!(!is_valid(None, true));
        assert!(!is_valid(Some(""), true));
        assert!(is_valid(None, false));
        assert!(is_valid(Some(""), false));
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        assert!(!is_valid(Some("   "), false));
        assert!(!is_valid(Some("\t"), false));
    }

    #[test]
    fn test_parse_reports_second_digit() {
        assert_eq!(
            Cnpj::parse("77973689000163"),
            Err(DocumentError::CheckDigitMismatch {
                kind: DocumentKind::Cnpj,
                position: 13,
                expected: 5,
                found: 3,
            })
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(format("46843485000186"), "46.843.485/0001-86");
        assert_eq!(format("46.?ABC843.485/0001-86abc"), "46.843.485/0001-86");
        assert_eq!(format("46843485000186000000000"), "46.843.485/0001-86");
        assert_eq!(format(""), "");
    }

    #[test]
    fn test_root_and_branch() {
        let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.root(), "11222333");
        assert_eq!(cnpj.branch(), "0001");
        assert!(cnpj.is_headquarters());

        let branch = Cnpj::parse("11.222.333/0002-62").unwrap();
        assert_eq!(branch.branch(), "0002");
        assert!(!branch.is_headquarters());
        assert!(cnpj.same_company(&branch));
    }

    #[test]
    fn test_display() {
        let cnpj: Cnpj = "81202136000186".parse().unwrap();
        assert_eq!(cnpj.to_string(), "81.202.136/0001-86");
    }

    #[test]
    fn test_validator_matches() {
        let validator = CnpjValidator::new();

        assert!(validator.matches("11.222.333/0001-81", "11222333000181"));
        assert!(validator.matches("11 222 333 0001 81", "11.222.333/0001-81"));
        assert!(!validator.matches("11.222.333/0001-81", "11.222.333/0002-62"));
    }

    #[test]
    fn test_validator_format() {
        let validator = CnpjValidator::optional();

        assert_eq!(validator.format("81202136000186"), "81.202.136/0001-86");
        assert_eq!(validator.format("81202136000186999"), "81.202.136/0001-86");
    }

    #[test]
    fn test_serde_roundtrip() {
        let cnpj = Cnpj::parse("46.238.497/0001-81").unwrap();
        let json = serde_json::to_string(&cnpj).unwrap();
        assert_eq!(json, "\"46238497000181\"");

        let back: Cnpj = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cnpj);
        assert!(serde_json::from_str::<Cnpj>("\"77173389000163\"").is_err());
    }
}
