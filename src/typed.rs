//! The typed string capability.
//!
//! A typed string is a value that is both a validated string and a
//! structured record of the fields its grammar captured. Concrete types
//! implement [`TypedString`]; ad hoc grammars use [`PatternString`].

use std::fmt;

use crate::error::ValidationError;
use crate::pattern::{Fields, Pattern};
use crate::schema::StringSchema;

/// A string type backed by a named-group grammar.
///
/// Construction is atomic: [`TypedString::parse`] either returns a fully
/// validated value or an error carrying the raw input.
///
/// # Examples
///
/// ```
/// use typed_strings::{CnPostalCode, TypedString};
///
/// let code = CnPostalCode::parse("025500").unwrap();
/// assert_eq!(code.province(), "02");
/// assert_eq!(code.as_str(), "025500");
///
/// let schema = CnPostalCode::schema();
/// assert!(!schema.pattern.unwrap().contains("(?P<"));
/// ```
pub trait TypedString: Sized {
    /// Returns the compiled grammar of this type.
    fn pattern() -> &'static Pattern;

    /// Builds a value from the fields captured from `input`.
    ///
    /// This is where types apply defaults and semantic checks.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the fields break a rule of the type.
    fn from_fields(input: &str, fields: Fields) -> Result<Self, ValidationError>;

    /// Returns the canonical string form.
    fn as_str(&self) -> &str;

    /// Parses and validates a raw string.
    ///
    /// # Errors
    ///
    /// Returns a `Format` error if the input does not match the grammar,
    /// or whatever error [`TypedString::from_fields`] reports.
    fn parse(input: &str) -> Result<Self, ValidationError> {
        let result = Self::pattern()
            .captures(input)
            .and_then(|fields| Self::from_fields(input, fields));

        if let Err(e) = &result {
            tracing::debug!(
                type_name = std::any::type_name::<Self>(),
                input,
                code = e.code(),
                "rejected typed string"
            );
        }
        result
    }

    /// Returns the schema description with group names erased.
    fn schema() -> StringSchema {
        Self::pattern().schema()
    }
}

/// Implements the string conversions, comparisons and serde support shared
/// by every [`TypedString`] in this crate. Comparisons use the canonical
/// form.
macro_rules! typed_string_impls {
    ($ty:ty) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::TypedString::as_str(self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::TypedString>::parse(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::ValidationError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                <Self as $crate::TypedString>::parse(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                $crate::TypedString::as_str(self)
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::TypedString::as_str(self) == $crate::TypedString::as_str(other)
            }
        }

        impl Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash($crate::TypedString::as_str(self), state);
            }
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                $crate::TypedString::as_str(self).cmp($crate::TypedString::as_str(other))
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str($crate::TypedString::as_str(self))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::TypedString>::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use typed_string_impls;

/// A typed string over a grammar supplied at runtime.
///
/// Keeps the input verbatim, the captured fields, and the grammar itself.
///
/// # Examples
///
/// ```
/// use typed_strings::{Pattern, PatternString};
///
/// let plate = Pattern::new(r"(?P<region>[A-Z]{2})-(?P<serial>\d{4})").unwrap();
/// let value = PatternString::parse(&plate, "AB-1234").unwrap();
/// assert_eq!(value.get("region"), Some("AB"));
/// assert_eq!(value.as_str(), "AB-1234");
/// ```
#[derive(Debug, Clone)]
pub struct PatternString {
    value: String,
    fields: Fields,
    pattern: Pattern,
}

impl PatternString {
    /// Parses `input` against `pattern`.
    ///
    /// # Errors
    ///
    /// Returns a `Format` error if the input does not match.
    pub fn parse(pattern: &Pattern, input: &str) -> Result<Self, ValidationError> {
        let fields = pattern.captures(input)?;
        Ok(Self {
            value: input.to_string(),
            fields,
            pattern: pattern.clone(),
        })
    }

    /// Returns the validated string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the value captured by a named group.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name)
    }

    /// Returns all captured fields.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Returns the grammar this value was parsed with.
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the schema description of the grammar.
    #[must_use]
    pub fn schema(&self) -> StringSchema {
        self.pattern.schema()
    }
}

impl fmt::Display for PatternString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for PatternString {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq for PatternString {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.pattern.as_str() == other.pattern.as_str()
    }
}

impl Eq for PatternString {}
