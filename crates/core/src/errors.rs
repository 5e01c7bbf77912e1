//! Error types for document validation

use thiserror::Error;

use crate::types::DocumentKind;

/// Reasons a document string fails validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Empty {0} value")]
    Empty(DocumentKind),

    #[error("Invalid {kind} length: expected {expected:?} digits, found {found}")]
    InvalidLength {
        kind: DocumentKind,
        expected: &'static [usize],
        found: usize,
    },

    #[error("Invalid {0}: all digits are identical")]
    RepeatedDigits(DocumentKind),

    #[error("Invalid {kind} check digit at position {position}: expected {expected}, found {found}")]
    CheckDigitMismatch {
        kind: DocumentKind,
        position: usize,
        expected: u32,
        found: u32,
    },

    #[error("Invalid boleto block {block}: expected check digit {expected}, found {found}")]
    BlockCheckMismatch {
        block: usize,
        expected: u32,
        found: u32,
    },
}

impl DocumentError {
    /// The document kind this error refers to
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentError::Empty(kind)
            | DocumentError::RepeatedDigits(kind)
            | DocumentError::InvalidLength { kind, .. }
            | DocumentError::CheckDigitMismatch { kind, .. } => *kind,
            DocumentError::BlockCheckMismatch { .. } => DocumentKind::Boleto,
        }
    }
}
