//! Identifier types backed by a check-digit algorithm.
//!
//! Unlike grammar-backed types, an identifier's validity is decided by an
//! [`Algorithm`]. The algorithm compacts and checks the raw value; the
//! identifier type translates its failures into [`ValidationError`]s and
//! describes itself through the algorithm's documentation.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::algorithms::{Imei, Isbn, Issn, Mac};
use crate::error::{AlgorithmError, IdentifierError, ValidationError, reraise};
use crate::schema::StringSchema;

/// Splits `Title (Description)` out of a documentation line.
static DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s*?\((.*?)\)").expect("description pattern compiles"));

/// A validation and formatting capability for one kind of identifier.
///
/// `validate` returns the compact canonical form. `format` renders a
/// canonical value for display and defaults to returning it unchanged.
pub trait Algorithm: Send + Sync {
    /// Short registry name, e.g. `issn`.
    fn name(&self) -> &'static str;

    /// Documentation; the first line reads `Title (Description).`
    fn doc(&self) -> &'static str;

    /// Checks a raw value and returns its compact form.
    ///
    /// # Errors
    ///
    /// Returns `AlgorithmError` describing why the value is invalid.
    fn validate(&self, value: &str) -> Result<String, AlgorithmError>;

    /// Renders a value in its display form.
    ///
    /// # Errors
    ///
    /// Returns `AlgorithmError` if the value cannot be formatted.
    fn format(&self, value: &str) -> Result<String, AlgorithmError> {
        Ok(value.to_owned())
    }
}

fn translate(error: AlgorithmError, value: &str) -> IdentifierError {
    match reraise(error, value) {
        Ok(e) => IdentifierError::Invalid(e),
        Err(e) => IdentifierError::Algorithm(e),
    }
}

/// An identifier kind: an algorithm plus its title and description.
///
/// # Examples
///
/// ```
/// use typed_strings::identifier;
///
/// let issn = identifier::lookup("issn").unwrap();
/// assert_eq!(issn.title(), "ISSN");
/// assert_eq!(issn.description(), "International Standard Serial Number");
///
/// let value = issn.parse("0378 5955").unwrap();
/// assert_eq!(value.as_str(), "0378-5955");
///
/// let err = issn.parse("0378-5954").unwrap_err();
/// assert_eq!(err.validation().unwrap().code(), "checksum");
/// ```
pub struct IdentifierType {
    title: String,
    description: String,
    algorithm: Box<dyn Algorithm>,
}

impl IdentifierType {
    /// Wraps an algorithm, deriving title and description from its
    /// documentation.
    ///
    /// The first line of the documentation, without its trailing period,
    /// is split as `Title (Description)`. A line that does not fit uses
    /// the algorithm name as title and the whole line as description.
    #[must_use]
    pub fn new(algorithm: Box<dyn Algorithm>) -> Self {
        let line = algorithm
            .doc()
            .trim()
            .lines()
            .next()
            .unwrap_or_default()
            .trim_end_matches('.');

        let (title, description) = DESCRIPTION.captures(line).map_or_else(
            || (algorithm.name().to_string(), line.to_string()),
            |caps| (caps[1].to_string(), caps[2].to_string()),
        );

        Self {
            title,
            description,
            algorithm,
        }
    }

    /// Registry name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Short title, e.g. `ISBN`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Long description, e.g. `International Standard Book Number`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The underlying algorithm.
    #[must_use]
    pub fn algorithm(&self) -> &dyn Algorithm {
        self.algorithm.as_ref()
    }

    /// Validates a raw value and returns its canonical compact form.
    ///
    /// # Errors
    ///
    /// Returns `IdentifierError::Invalid` for a classified failure, or
    /// `IdentifierError::Algorithm` for an unclassified one.
    pub fn validate(&self, raw: &str) -> Result<String, IdentifierError> {
        self.algorithm
            .validate(raw)
            .map_err(|e| translate(e, raw))
    }

    /// Builds the display value from a canonical one.
    ///
    /// # Errors
    ///
    /// Same classification as [`IdentifierType::validate`].
    pub fn format(&self, canonical: &str) -> Result<Identifier<'_>, IdentifierError> {
        let value = self
            .algorithm
            .format(canonical)
            .map_err(|e| translate(e, canonical))?;
        Ok(Identifier { kind: self, value })
    }

    /// Validates then formats.
    ///
    /// # Errors
    ///
    /// Same classification as [`IdentifierType::validate`].
    pub fn parse(&self, raw: &str) -> Result<Identifier<'_>, IdentifierError> {
        let canonical = self.validate(raw)?;
        self.format(&canonical)
    }

    /// Returns the schema description: a string with title and
    /// description.
    #[must_use]
    pub fn schema(&self) -> StringSchema {
        StringSchema::new().described(&self.title, &self.description)
    }
}

impl fmt::Debug for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierType")
            .field("name", &self.name())
            .field("title", &self.title)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A validated identifier value in display form.
#[derive(Clone)]
pub struct Identifier<'a> {
    kind: &'a IdentifierType,
    value: String,
}

impl Identifier<'_> {
    /// The identifier type this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> &IdentifierType {
        self.kind
    }

    /// The display form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identifier")
            .field("kind", &self.kind.name())
            .field("value", &self.value)
            .finish()
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Identifier<'_> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq for Identifier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind.name() == other.kind.name() && self.value == other.value
    }
}

impl Eq for Identifier<'_> {}

#[cfg(feature = "serde")]
impl serde::Serialize for Identifier<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

static REGISTRY: Lazy<Vec<IdentifierType>> = Lazy::new(|| {
    vec![
        IdentifierType::new(Box::new(Imei)),
        IdentifierType::new(Box::new(Isbn)),
        IdentifierType::new(Box::new(Issn)),
        IdentifierType::new(Box::new(Mac)),
    ]
});

/// Every shipped identifier type, ordered by name.
#[must_use]
pub fn registry() -> &'static [IdentifierType] {
    &REGISTRY
}

/// Finds a shipped identifier type by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static IdentifierType> {
    REGISTRY.iter().find(|kind| kind.name() == name)
}

/// Validates `raw` with the named identifier type.
///
/// # Errors
///
/// Returns an `Invalid` error if no such type is registered, otherwise
/// whatever [`IdentifierType::parse`] reports.
pub fn parse(name: &str, raw: &str) -> Result<Identifier<'static>, IdentifierError> {
    let Some(kind) = lookup(name) else {
        return Err(ValidationError::invalid(raw)
            .with_detail(format!("unknown identifier type '{name}'"))
            .into());
    };
    kind.parse(raw)
}
