use super::{clean, is_digits, luhn};
use crate::error::AlgorithmError;
use crate::identifier::Algorithm;

/// International Mobile Equipment Identity.
///
/// 14 digits without check digit, 15 with a Luhn check digit, or 16 for
/// an IMEISV (software version instead of check digit).
#[derive(Debug, Clone, Copy, Default)]
pub struct Imei;

impl Imei {
    fn compact(number: &str) -> String {
        clean(number, &[' ', '-']).to_uppercase()
    }
}

impl Algorithm for Imei {
    fn name(&self) -> &'static str {
        "imei"
    }

    fn doc(&self) -> &'static str {
        "IMEI (International Mobile Equipment Identity).\n\n\
         The IMEI is used to identify mobile phones. An IMEI is 14, 15 (when\n\
         the check digit is included) or 16 digits (IMEISV) long."
    }

    fn validate(&self, value: &str) -> Result<String, AlgorithmError> {
        let number = Self::compact(value);
        if !is_digits(&number) {
            return Err(AlgorithmError::InvalidFormat(None));
        }
        match number.len() {
            14 | 16 => {}
            15 => {
                luhn::validate(&number)?;
            }
            _ => return Err(AlgorithmError::InvalidLength(None)),
        }
        Ok(number)
    }

    /// Splits into reporting body, type, serial and check/version digits.
    fn format(&self, value: &str) -> Result<String, AlgorithmError> {
        let number = Self::compact(value);
        if !is_digits(&number) {
            return Err(AlgorithmError::InvalidFormat(None));
        }
        let parts = [(0, 2), (2, 8), (8, 14), (14, number.len())];
        Ok(parts
            .iter()
            .filter_map(|&(start, end)| number.get(start..end.min(number.len())))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-"))
    }
}
