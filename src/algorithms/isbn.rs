use super::{clean, digit, is_digits};
use crate::error::AlgorithmError;
use crate::identifier::Algorithm;

/// International Standard Book Number, ISBN-10 or ISBN-13.
///
/// A nine-digit SBN is read as an ISBN-10 with a leading zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Isbn;

impl Isbn {
    fn compact(number: &str) -> String {
        let number = clean(number, &[' ', '-']).to_uppercase();
        if number.len() == 9 {
            format!("0{number}")
        } else {
            number
        }
    }

    fn isbn10_check_digit(body: &str) -> char {
        let sum: u32 = body
            .bytes()
            .zip(1..)
            .map(|(b, weight)| weight * digit(b))
            .sum();
        match sum % 11 {
            10 => 'X',
            check => char::from_digit(check, 10).unwrap_or('0'),
        }
    }

    fn ean_check_digit(body: &str) -> char {
        let sum: u32 = body
            .bytes()
            .rev()
            .zip([3, 1].into_iter().cycle())
            .map(|(b, weight)| weight * digit(b))
            .sum();
        char::from_digit((10 - sum % 10) % 10, 10).unwrap_or('0')
    }

    fn validate_ean(number: &str) -> Result<(), AlgorithmError> {
        if !is_digits(number) {
            return Err(AlgorithmError::InvalidFormat(None));
        }
        let (body, check) = number.split_at(number.len() - 1);
        if !check.starts_with(Self::ean_check_digit(body)) {
            return Err(AlgorithmError::InvalidChecksum(None));
        }
        Ok(())
    }
}

impl Algorithm for Isbn {
    fn name(&self) -> &'static str {
        "isbn"
    }

    fn doc(&self) -> &'static str {
        "ISBN (International Standard Book Number).\n\n\
         The ISBN is the International Standard Book Number, used to identify\n\
         publications. An ISBN is used to identify books."
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
        match number.len() {
            10 => {
                if !check.starts_with(Self::isbn10_check_digit(body)) {
                    return Err(AlgorithmError::InvalidChecksum(None));
                }
            }
            13 => {
                Self::validate_ean(&number)?;
                if !matches!(&number[..3], "978" | "979") {
                    return Err(AlgorithmError::InvalidComponent(Some(
                        "the EAN prefix is not a Bookland prefix".into(),
                    )));
                }
            }
            _ => return Err(AlgorithmError::InvalidLength(None)),
        }
        Ok(number)
    }
}
