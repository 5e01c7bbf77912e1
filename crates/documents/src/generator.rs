//! Synthetic CPF generation
//!
//! The random source is injected so generation can be reproduced in tests
//! with a seeded RNG while normal use draws from entropy.

use brazilian_utils_core::all_same;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::cpf::{check_digits, BASE_LENGTH};

/// Fiscal region digit for each state abbreviation
pub static STATE_REGION_DIGITS: [(&str, u32); 27] = [
    ("RS", 0),
    ("DF", 1),
    ("GO", 1),
    ("MT", 1),
    ("MS", 1),
    ("TO", 1),
    ("AM", 2),
    ("PA", 2),
    ("RR", 2),
    ("AP", 2),
    ("AC", 2),
    ("RO", 2),
    ("CE", 3),
    ("MA", 3),
    ("PI", 3),
    ("PB", 4),
    ("PE", 4),
    ("AL", 4),
    ("RN", 4),
    ("BA", 5),
    ("SE", 5),
    ("MG", 6),
    ("RJ", 7),
    ("ES", 7),
    ("SP", 8),
    ("PR", 9),
    ("SC", 9),
];

/// Look up the region digit of a state abbreviation
///
/// Case-insensitive; surrounding whitespace is ignored.
pub fn region_digit(state_code: &str) -> Option<u32> {
    let code = state_code.trim().to_ascii_uppercase();
    STATE_REGION_DIGITS
        .iter()
        .find(|(state, _)| *state == code)
        .map(|&(_, digit)| digit)
}

/// Generator of random valid CPFs
#[derive(Debug, Clone)]
pub struct CpfGenerator<R = StdRng> {
    rng: R,
}

impl CpfGenerator<StdRng> {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CpfGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CpfGenerator<R> {
    /// Create a generator drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate an unformatted 11-digit CPF
    ///
    /// A recognized `state_code` fixes the ninth digit; otherwise it is
    /// random. Draws that would produce a single repeated digit are
    /// discarded, since those are never valid.
    pub fn generate(&mut self, state_code: &str) -> String {
        let region = region_digit(state_code);

        loop {
            let mut digits = [0u32; BASE_LENGTH + 2];
            for digit in digits.iter_mut().take(BASE_LENGTH - 1) {
                *digit = self.rng.gen_range(0..10);
            }
            digits[BASE_LENGTH - 1] = match region {
                Some(digit) => digit,
                None => self.rng.gen_range(0..10),
            };

            let [first, second] = check_digits(&digits[..BASE_LENGTH]);
            digits[BASE_LENGTH] = first;
            digits[BASE_LENGTH + 1] = second;

            if all_same(&digits) {
                debug!("Discarding generated CPF with all same digits");
                continue;
            }

            return digits.iter().map(|d| d.to_string()).collect();
        }
    }
}
