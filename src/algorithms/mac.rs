use once_cell::sync::Lazy;
use regex::Regex;

use super::clean;
use crate::error::AlgorithmError;
use crate::identifier::Algorithm;

static MAC: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([0-9a-f]{2}:){5}[0-9a-f]{2}$").expect("MAC address pattern compiles")
});

/// Media Access Control address (EUI-48).
///
/// Accepts colon, hyphen, dot (Cisco) and unseparated notations; the
/// compact form is lowercase colon-separated pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mac;

impl Mac {
    fn compact(number: &str) -> String {
        let number = clean(number, &[' '])
            .to_lowercase()
            .replace(['-', '.'], ":");
        if number.matches(':').count() == 5 {
            return number
                .split(':')
                .map(|part| format!("{part:0>2}"))
                .collect::<Vec<_>>()
                .join(":");
        }
        let digits: Vec<char> = number.chars().filter(|&c| c != ':').collect();
        digits
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl Algorithm for Mac {
    fn name(&self) -> &'static str {
        "mac"
    }

    fn doc(&self) -> &'static str {
        "MAC address (Media Access Control address).\n\n\
         A media access control address (MAC address, sometimes Ethernet\n\
         address) is a unique identifier assigned to a network interface."
    }

    fn validate(&self, value: &str) -> Result<String, AlgorithmError> {
        let number = Self::compact(value);
        if number.chars().count() != 17 {
            return Err(AlgorithmError::InvalidLength(None));
        }
        if !MAC.is_match(&number) {
            return Err(AlgorithmError::InvalidFormat(None));
        }
        Ok(number)
    }

    fn format(&self, value: &str) -> Result<String, AlgorithmError> {
        Ok(Self::compact(value))
    }
}
