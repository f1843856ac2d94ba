use super::{clean, digit, is_digits};
use crate::error::AlgorithmError;
use crate::identifier::Algorithm;

/// International Standard Serial Number.
///
/// Eight characters: seven digits and a mod 11 check character (`0-9` or
/// `X`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Issn;

impl Issn {
    fn compact(number: &str) -> String {
        clean(number, &[' ', '-']).to_uppercase()
    }

    fn check_digit(body: &str) -> char {
        let sum: u32 = body
            .bytes()
            .zip((2..=8).rev())
            .map(|(b, weight)| weight * digit(b))
            .sum();
        match (11 - sum % 11) % 11 {
            10 => 'X',
            // < 10
            check => char::from_digit(check, 10).unwrap_or('0'),
        }
    }
}

impl Algorithm for Issn {
    fn name(&self) -> &'static str {
        "issn"
    }

    fn doc(&self) -> &'static str {
        "ISSN (International Standard Serial Number).\n\n\
         The ISSN is an 8-digit code used to identify newspapers, journals,\n\
         magazines and periodicals of all kinds and on all media."
    }

    fn validate(&self, value: &str) -> Result<String, AlgorithmError> {
        let number = Self::compact(value);
        if !number.is_ascii() {
            return Err(AlgorithmError::InvalidFormat(None));
        }
        let (body, check) = number.split_at(number.len().saturating_sub(1));
        if !is_digits(body) {
            return Err(AlgorithmError::InvalidFormat(None));
        }
        if number.len() != 8 {
            return Err(AlgorithmError::InvalidLength(None));
        }
        if !check.starts_with(Self::check_digit(body)) {
            return Err(AlgorithmError::InvalidChecksum(None));
        }
        Ok(number)
    }

    fn format(&self, value: &str) -> Result<String, AlgorithmError> {
        let number = Self::compact(value);
        if number.len() != 8 || !number.is_ascii() {
            return Err(AlgorithmError::InvalidLength(None));
        }
        let (left, right) = number.split_at(4);
        Ok(format!("{left}-{right}"))
    }
}
