//! # Brazilian Documents
//!
//! Validation, formatting and generation for Brazilian identification
//! strings.
//!
//! ## Features
//!
//! - **CPF**: individual taxpayer ID validation, formatting and generation
//! - **CNPJ**: company tax ID validation, formatting, root/branch access
//! - **Boleto**: bank slip validation for barcodes and digitable lines
//! - **CEP**: postal code validation and formatting
//! - **Phone**: DDD area code and landline/mobile prefix validation
//! - **Email**: simple `local@domain` validation
//!
//! ## Example
//!
//! ```rust
//! use brazilian_utils_documents::{boleto, cnpj, cpf};
//!
//! assert!(cpf::is_valid(Some("012.345.678-90"), true));
//! assert!(cnpj::is_valid(Some("81.202.136/0001-86"), true));
//! assert!(boleto::is_valid(None, false));
//!
//! assert_eq!(cpf::format("01234567890"), "012.345.678-90");
//! assert!(cpf::is_valid(Some(&cpf::generate("SP")), true));
//! ```

#[macro_use]
pub mod engine;

pub mod boleto;
pub mod cep;
pub mod cnpj;
pub mod cpf;
pub mod email;
pub mod format;
pub mod generator;
pub mod phone;

pub use boleto::{Boleto, BoletoValidator};
pub use brazilian_utils_core::{extract_digits, DocumentError, DocumentKind};
pub use cnpj::{Cnpj, CnpjValidator};
pub use cpf::{Cpf, CpfValidator};
pub use engine::{DocumentEngine, Validator};
pub use generator::CpfGenerator;

/// Validate a value as a required field of the given kind
pub fn is_valid(kind: DocumentKind, value: Option<&str>) -> bool {
    match kind {
        DocumentKind::Cpf => cpf::is_valid(value, true),
        DocumentKind::Cnpj => cnpj::is_valid(value, true),
        DocumentKind::Boleto => boleto::is_valid(value, true),
        DocumentKind::Cep => cep::is_valid(value),
        DocumentKind::Email => email::is_valid(value),
        DocumentKind::Phone => phone::is_valid(value),
    }
}
