//! # Brazilian Utils Core
//!
//! Shared building blocks for the Brazilian document validators.
//!
//! Every checksum-protected document (CPF, CNPJ, Boleto) follows the same
//! pipeline: strip non-digits, check the length, reject degenerate input and
//! recompute one or more weighted check digits. This crate provides the
//! pieces of that pipeline; the document rules live in
//! `brazilian-utils-documents`.

pub mod checksum;
pub mod digits;
pub mod errors;
pub mod types;

pub use checksum::{weighted_sum, Mod11Rule, WeightTable};
pub use digits::{all_same, digit_values, extract_digits, is_blank};
pub use errors::*;
pub use types::*;
