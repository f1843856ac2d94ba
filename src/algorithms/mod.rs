//! Check-digit algorithms behind the shipped identifier types.
//!
//! Each algorithm compacts its input (dropping separators) before
//! validating, and returns the compact form.

mod imei;
mod isbn;
mod issn;
pub mod luhn;
mod mac;

pub use imei::Imei;
pub use isbn::Isbn;
pub use issn::Issn;
pub use mac::Mac;

/// Removes every character in `delete` and surrounding whitespace.
pub(crate) fn clean(number: &str, delete: &[char]) -> String {
    number
        .chars()
        .filter(|c| !delete.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// True for a non-empty string of ASCII digits.
pub(crate) fn is_digits(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

/// Value of an ASCII digit.
pub(crate) fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_drops_separators() {
        assert_eq!(clean(" 0378-5955 ", &[' ', '-']), "03785955");
        assert_eq!(clean("a.b", &[]), "a.b");
    }

    #[test]
    fn digits() {
        assert!(is_digits("0123"));
        assert!(!is_digits(""));
        assert!(!is_digits("12a"));
        assert!(!is_digits("١٢"));
    }
}
