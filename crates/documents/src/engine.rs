//! Shared validation pipeline for checksum-protected documents
//!
//! CPF, CNPJ and Boleto are validated the same way: extract digits, check
//! the length, reject degenerate input, then verify the check digits. Each
//! document only supplies the last step.

use std::marker::PhantomData;

use brazilian_utils_core::{all_same, digit_values, extract_digits, DocumentError, DocumentKind};
use tracing::debug;

use crate::format::apply_pattern;

/// Route `Deserialize` through the type's `parse()` so that invalid values
/// are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::engine::DocumentEngine>::parse(&raw)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A document validated by a weighted check-digit scheme
pub trait DocumentEngine: Sized {
    /// Which document this engine validates
    const KIND: DocumentKind;

    /// Whether strings made of one repeated digit are rejected before the
    /// checksum runs
    const REJECT_REPEATED: bool = true;

    /// Punctuation template, if the document has one
    const PATTERN: Option<&'static str> = None;

    /// Verify the check digits of a digit sequence of accepted length
    fn verify(digits: &[u32]) -> Result<(), DocumentError>;

    /// Build the document from a digit string that passed [`verify`](Self::verify)
    fn from_verified(digits: String) -> Self;

    /// Parse free-form input, reporting why it is invalid
    fn parse(input: &str) -> Result<Self, DocumentError> {
        if input.trim().is_empty() {
            return Err(DocumentError::Empty(Self::KIND));
        }

        let digits = extract_digits(input);
        let expected = Self::KIND.lengths();

        if !expected.contains(&digits.len()) {
            debug!(
                kind = %Self::KIND,
                digits_found = digits.len(),
                "Invalid document length"
            );
            return Err(DocumentError::InvalidLength {
                kind: Self::KIND,
                expected,
                found: digits.len(),
            });
        }

        let values = digit_values(&digits);
        if Self::REJECT_REPEATED && all_same(&values) {
            debug!(kind = %Self::KIND, "Document has all same digits");
            return Err(DocumentError::RepeatedDigits(Self::KIND));
        }

        Self::verify(&values)?;
        Ok(Self::from_verified(digits))
    }

    /// Boolean validation with optional-field semantics
    ///
    /// Absent or empty input is valid exactly when the field is not
    /// required. Anything else, whitespace included, must parse.
    fn is_valid(input: Option<&str>, is_required: bool) -> bool {
        match input {
            None | Some("") => !is_required,
            Some(value) => Self::parse(value).is_ok(),
        }
    }
}

/// Validator configured for required or optional fields
#[derive(Debug, Clone)]
pub struct Validator<D> {
    required: bool,
    _document: PhantomData<fn() -> D>,
}

impl<D: DocumentEngine> Validator<D> {
    /// Create a validator for a required field
    pub fn new() -> Self {
        Self {
            required: true,
            _document: PhantomData,
        }
    }

    /// Create a validator that accepts absent or empty input
    pub fn optional() -> Self {
        Self {
            required: false,
            ..Self::new()
        }
    }

    /// Set whether the field is required
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Check a possibly absent value
    pub fn is_valid(&self, input: Option<&str>) -> bool {
        D::is_valid(input, self.required)
    }

    /// Parse a value into the validated document
    pub fn validate(&self, input: &str) -> Result<D, DocumentError> {
        D::parse(input)
    }

    /// Punctuate a value without validating it
    ///
    /// Documents without a template come back as their bare digits.
    pub fn format(&self, input: &str) -> String {
        match D::PATTERN {
            Some(pattern) => apply_pattern(input, pattern),
            None => extract_digits(input),
        }
    }
}

impl<D: DocumentEngine + PartialEq> Validator<D> {
    /// Check whether two inputs are the same valid document
    ///
    /// Punctuation is ignored; invalid input never matches.
    pub fn matches(&self, first: &str, second: &str) -> bool {
        match (D::parse(first), D::parse(second)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl<D: DocumentEngine> Default for Validator<D> {
    fn default() -> Self {
        Self::new()
    }
}
