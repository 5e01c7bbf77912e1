//! Weighted checksums
//!
//! All check digits in this workspace are computed the same way: multiply
//! each digit by a weight, add the products and reduce the sum modulo 10 or
//! 11. The documents differ only in the weight table and in how the
//! remainder maps to a digit.

use serde::{Deserialize, Serialize};

/// Weight assigned to each digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightTable {
    /// One weight per position, left to right
    Explicit(&'static [u32]),
    /// `weight[i] = n - i`, left to right
    Descending(u32),
    /// 2, 1, 2, 1, ... walking right to left; products above 9 are reduced
    /// to `1 + product % 10`
    AlternatingTwoOne,
    /// 2, 3, ..., 9, 2, 3, ... walking right to left
    CyclicTwoToNine,
}

/// Sum of `digit[i] * weight[i]` over every digit
///
/// # Panics
///
/// Panics when an [`WeightTable::Explicit`] or [`WeightTable::Descending`]
/// table has fewer weights than there are digits. That is a programming
/// error in the caller, not a property of user input.
pub fn weighted_sum(digits: &[u32], weights: WeightTable) -> u32 {
    match weights {
        WeightTable::Explicit(table) => {
            assert!(
                table.len() >= digits.len(),
                "weight table has {} entries for {} digits",
                table.len(),
                digits.len()
            );
            digits.iter().zip(table).map(|(d, w)| d * w).sum()
        }
        WeightTable::Descending(start) => {
            assert!(
                start as usize >= digits.len(),
                "descending weights from {} cannot cover {} digits",
                start,
                digits.len()
            );
            digits
                .iter()
                .enumerate()
                .map(|(i, &d)| d * (start - i as u32))
                .sum()
        }
        WeightTable::AlternatingTwoOne => digits
            .iter()
            .rev()
            .enumerate()
            .map(|(pos, &d)| {
                let product = d * if pos % 2 == 0 { 2 } else { 1 };
                if product > 9 {
                    1 + product % 10
                } else {
                    product
                }
            })
            .sum(),
        WeightTable::CyclicTwoToNine => digits
            .iter()
            .rev()
            .enumerate()
            .map(|(pos, &d)| d * (2 + (pos % 8) as u32))
            .sum(),
    }
}

/// Weighted sum with descending weights starting at `start`
///
/// `generate_checksum(&[1, 2], 10)` is `1 * 10 + 2 * 9 = 28`.
pub fn generate_checksum(digits: &[u32], start: u32) -> u32 {
    weighted_sum(digits, WeightTable::Descending(start))
}

/// Weighted sum with an explicit weight table
pub fn generate_checksum_with(digits: &[u32], weights: &'static [u32]) -> u32 {
    weighted_sum(digits, WeightTable::Explicit(weights))
}

/// How a Mod-11 remainder becomes a check digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mod11Rule {
    /// Remainder 0 or 1 gives 0 (CPF, CNPJ)
    Standard,
    /// Remainder 0 or 1 gives 1 (Boleto barcode)
    Boleto,
}

impl Mod11Rule {
    /// Reduce a weighted sum to a check digit
    pub fn check_digit(self, sum: u32) -> u32 {
        let remainder = sum % 11;
        if remainder < 2 {
            match self {
                Mod11Rule::Standard => 0,
                Mod11Rule::Boleto => 1,
            }
        } else {
            11 - remainder
        }
    }
}

/// Reduce a weighted sum to a Mod-10 check digit
pub fn mod10_check_digit(sum: u32) -> u32 {
    match sum % 10 {
        0 => 0,
        remainder => 10 - remainder,
    }
}

/// Mod-10 check digit of a Boleto digitable-line block
pub fn mod10(digits: &[u32]) -> u32 {
    mod10_check_digit(weighted_sum(digits, WeightTable::AlternatingTwoOne))
}

/// Mod-11 check digit of a Boleto barcode (without its check digit)
pub fn boleto_mod11(digits: &[u32]) -> u32 {
    Mod11Rule::Boleto.check_digit(weighted_sum(digits, WeightTable::CyclicTwoToNine))
}
