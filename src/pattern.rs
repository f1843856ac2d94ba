//! Compiled grammars and named-capture extraction.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::schema::StringSchema;

/// Matches the opening of a named group, `(?P<name>` or `(?<name>`.
static NAMED_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\?P?<\w+>").expect("named group pattern compiles"));

/// Removes capture group names from a pattern.
///
/// Every `(?P<name>...)` becomes a plain group `(...)`, so the pattern
/// still matches exactly the same strings but no longer exposes field
/// names (e.g. when published as a JSON Schema `pattern`).
///
/// # Examples
///
/// ```
/// use typed_strings::unname_groups;
///
/// assert_eq!(unname_groups(r"^(?P<zone>\d)(?P<area>\d\d)$"), r"^(\d)(\d\d)$");
/// ```
#[must_use]
pub fn unname_groups(pattern: &str) -> String {
    NAMED_GROUP.replace_all(pattern, "(").into_owned()
}

/// An immutable compiled grammar.
///
/// Holds the regular expression, anchored at both ends, together with the
/// ordered names of its capture groups. Cloning is cheap.
///
/// # Examples
///
/// ```
/// use typed_strings::Pattern;
///
/// let pattern = Pattern::new(r"(?P<area>\d{3})-(?P<line>\d{4})").unwrap();
/// let fields = pattern.captures("555-0100").unwrap();
/// assert_eq!(fields.get("area"), Some("555"));
/// assert!(pattern.captures("555-01000").is_err());
/// ```
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
    names: Arc<[String]>,
}

impl Pattern {
    /// Compiles a grammar.
    ///
    /// The source is always wrapped as `^(?:source)$`, so a top-level
    /// alternation cannot escape the anchors.
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if the source is not a valid pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{source})$"))?;
        let names = regex
            .capture_names()
            .flatten()
            .map(str::to_string)
            .collect::<Vec<_>>()
            .into();

        Ok(Self { regex, names })
    }

    /// Returns the anchored pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the declared capture group names, in pattern order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns true if the whole input matches.
    #[must_use]
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Matches the whole input and extracts every named group.
    ///
    /// Groups that did not take part in the match map to `None`.
    ///
    /// # Errors
    ///
    /// Returns a `Format` error carrying `input` if it does not match.
    pub fn captures(&self, input: &str) -> Result<Fields, ValidationError> {
        let caps = self
            .regex
            .captures(input)
            .ok_or_else(|| ValidationError::format(input))?;

        let values = self
            .names
            .iter()
            .map(|name| {
                let value = caps.name(name).map(|m| m.as_str().to_string());
                (name.clone(), value)
            })
            .collect();

        Ok(Fields { values })
    }

    /// Returns the pattern with group names erased.
    #[must_use]
    pub fn unnamed(&self) -> String {
        unname_groups(self.as_str())
    }

    /// Returns the schema description of strings matching this pattern.
    #[must_use]
    pub fn schema(&self) -> StringSchema {
        StringSchema::with_pattern(self.unnamed())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("pattern", &self.as_str())
            .field("names", &self.names)
            .finish()
    }
}

/// Values captured by a [`Pattern`], keyed by group name.
///
/// The key set is exactly the pattern's named groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fields {
    values: BTreeMap<String, Option<String>>,
}

impl Fields {
    /// Returns the captured value of a group.
    ///
    /// `None` both for a group that did not participate and for an
    /// undeclared name; use [`Fields::contains`] to tell them apart.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Option::as_deref)
    }

    /// Returns true if the pattern declares the group.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Removes a group and returns its value.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.values.remove(name).flatten()
    }

    /// Removes a group that the grammar guarantees to be present.
    ///
    /// # Errors
    ///
    /// Returns a `Format` error carrying `input` if the group is absent.
    pub fn require(&mut self, name: &str, input: &str) -> Result<String, ValidationError> {
        self.take(name).ok_or_else(|| {
            ValidationError::format(input).with_detail(format!("missing '{name}'"))
        })
    }

    /// Returns the number of declared groups still held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no groups are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}
