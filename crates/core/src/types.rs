//! Core type definitions shared by the document validators

use serde::{Deserialize, Serialize};

/// Supported Brazilian document types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Cadastro de Pessoa Física (individual taxpayer)
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (company)
    Cnpj,
    /// Bank payment slip, barcode or digitable line
    Boleto,
    /// Código de Endereçamento Postal
    Cep,
    Email,
    Phone,
}

impl DocumentKind {
    /// Accepted digit counts once punctuation is stripped
    ///
    /// Email has no digit-length rule and returns an empty slice.
    pub fn lengths(&self) -> &'static [usize] {
        match self {
            DocumentKind::Cpf => &[11],
            DocumentKind::Cnpj => &[14],
            DocumentKind::Boleto => &[44, 47],
            DocumentKind::Cep => &[8],
            DocumentKind::Phone => &[10, 11],
            DocumentKind::Email => &[],
        }
    }

    /// Upper-case label used in messages and log fields
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
            DocumentKind::Boleto => "BOLETO",
            DocumentKind::Cep => "CEP",
            DocumentKind::Email => "EMAIL",
            DocumentKind::Phone => "PHONE",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
