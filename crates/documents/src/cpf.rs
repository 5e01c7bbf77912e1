//! CPF (Cadastro de Pessoa Física) validation, formatting and generation
//!
//! Brazilian individual taxpayer registry number: nine base digits followed
//! by two Mod-11 check digits. The ninth base digit encodes the fiscal
//! region that issued the number.

use brazilian_utils_core::checksum::generate_checksum;
use brazilian_utils_core::{DocumentError, DocumentKind, Mod11Rule};
use serde::Serialize;
use tracing::debug;

use crate::engine::{DocumentEngine, Validator};
use crate::format::{apply_pattern, CPF_PATTERN};
use crate::generator::CpfGenerator;

/// Number of digits before the check digits
pub const BASE_LENGTH: usize = 9;

/// A CPF that passed check-digit validation
///
/// Stored as the canonical 11-digit string; displayed as `DDD.DDD.DDD-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Access the 11-digit canonical form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Punctuated form: `DDD.DDD.DDD-DD`
    pub fn formatted(&self) -> String {
        apply_pattern(&self.0, CPF_PATTERN)
    }

    /// Fiscal region digit (ninth digit)
    pub fn region_digit(&self) -> u32 {
        self.0
            .chars()
            .nth(BASE_LENGTH - 1)
            .and_then(|c| c.to_digit(10))
            .unwrap_or_default()
    }
}

impl DocumentEngine for Cpf {
    const KIND: DocumentKind = DocumentKind::Cpf;
    const PATTERN: Option<&'static str> = Some(CPF_PATTERN);

    fn verify(digits: &[u32]) -> Result<(), DocumentError> {
        let computed = check_digits(&digits[..BASE_LENGTH]);

        for (offset, &expected) in computed.iter().enumerate() {
            let position = BASE_LENGTH + offset;
            let found = digits[position];
            if found != expected {
                debug!(
                    position = position,
                    expected = expected,
                    got = found,
                    "CPF check digit invalid"
                );
                return Err(DocumentError::CheckDigitMismatch {
                    kind: DocumentKind::Cpf,
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

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl std::str::FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// CPF validator with required/optional configuration
pub type CpfValidator = Validator<Cpf>;

/// Compute both check digits for nine base digits
///
/// The first uses weights 10 down to 2. The second uses weights 11 down to
/// 2 over the base digits plus the first check digit.
pub fn check_digits(base: &[u32]) -> [u32; 2] {
    let first = Mod11Rule::Standard.check_digit(generate_checksum(base, 10));

    let mut extended = base.to_vec();
    extended.push(first);
    let second = Mod11Rule::Standard.check_digit(generate_checksum(&extended, 11));

    [first, second]
}

/// Check whether a CPF is valid
///
/// Absent or empty input is valid only when `is_required` is false.
pub fn is_valid(value: Option<&str>, is_required: bool) -> bool {
    Cpf::is_valid(value, is_required)
}

/// Format a CPF as `DDD.DDD.DDD-DD`
///
/// Extra digits are dropped and short input is left-padded with zeros. No
/// validation is performed.
pub fn format(value: &str) -> String {
    apply_pattern(value, CPF_PATTERN)
}

/// Generate a random valid CPF
///
/// When `state_code` is a recognized state abbreviation the ninth digit is
/// that state's region digit; otherwise it is random.
pub fn generate(state_code: &str) -> String {
    CpfGenerator::with_rng(rand::thread_rng()).generate(state_code)
}
