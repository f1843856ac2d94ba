//! The Luhn mod 10 check digit algorithm.

use super::{digit, is_digits};
use crate::error::AlgorithmError;

/// Returns the Luhn checksum of a digit string; `Some(0)` means valid.
///
/// `None` if `number` is empty or holds anything but ASCII digits.
#[must_use]
pub fn checksum(number: &str) -> Option<u32> {
    if !is_digits(number) {
        return None;
    }
    let sum = number
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = digit(b);
            if i % 2 == 1 {
                let doubled = d * 2;
                doubled / 10 + doubled % 10
            } else {
                d
            }
        })
        .sum::<u32>();
    Some(sum % 10)
}

/// Checks a number that ends in a Luhn check digit.
///
/// # Errors
///
/// `InvalidFormat` for non-digits, `InvalidChecksum` on mismatch.
pub fn validate(number: &str) -> Result<&str, AlgorithmError> {
    match checksum(number) {
        None => Err(AlgorithmError::InvalidFormat(None)),
        Some(0) => Ok(number),
        Some(_) => Err(AlgorithmError::InvalidChecksum(None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_numbers() {
        assert_eq!(checksum("79927398713"), Some(0));
        assert_eq!(checksum("490154203237518"), Some(0));
        assert_eq!(checksum("79927398710"), Some(7));
        assert!(validate("4111111111111111").is_ok());
    }

    #[test]
    fn failures() {
        assert_eq!(
            validate("79927398710"),
            Err(AlgorithmError::InvalidChecksum(None))
        );
        assert_eq!(validate(""), Err(AlgorithmError::InvalidFormat(None)));
        assert_eq!(validate("12x"), Err(AlgorithmError::InvalidFormat(None)));
    }

    #[test]
    fn non_digits_have_no_checksum() {
        assert_eq!(checksum(""), None);
        assert_eq!(checksum("12 34"), None);
        assert_eq!(checksum("4111-1111"), None);
    }
}
