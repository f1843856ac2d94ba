//! Postal codes.

use once_cell::sync::Lazy;

use crate::error::ValidationError;
use crate::pattern::{Fields, Pattern};
use crate::typed::{TypedString, typed_string_impls};

static CN_POSTAL_CODE: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(r"(?P<province>\d\d)(?P<zone>\d)(?P<prefecture>\d)(?P<area>\d\d)")
        .expect("CN postal code grammar compiles")
});

/// A six-digit postal code of the People's Republic of China.
///
/// # Examples
///
/// ```
/// use typed_strings::{CnPostalCode, TypedString};
///
/// let code = CnPostalCode::parse("100871").unwrap();
/// assert_eq!(code.province(), "10");
/// assert_eq!(code.area(), "71");
/// ```
#[derive(Debug, Clone)]
pub struct CnPostalCode {
    value: String,
    province: String,
    zone: String,
    prefecture: String,
    area: String,
}

impl CnPostalCode {
    /// Province, province-level municipality or autonomous region.
    #[must_use]
    pub fn province(&self) -> &str {
        &self.province
    }

    /// Postal zone within the province.
    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Post office of a prefecture or prefecture-level city.
    #[must_use]
    pub fn prefecture(&self) -> &str {
        &self.prefecture
    }

    /// Delivery area.
    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }
}

impl TypedString for CnPostalCode {
    fn pattern() -> &'static Pattern {
        &CN_POSTAL_CODE
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        Ok(Self {
            value: input.to_string(),
            province: fields.require("province", input)?,
            zone: fields.require("zone", input)?,
            prefecture: fields.require("prefecture", input)?,
            area: fields.require("area", input)?,
        })
    }

    fn as_str(&self) -> &str {
        &self.value
    }
}

typed_string_impls!(CnPostalCode);
