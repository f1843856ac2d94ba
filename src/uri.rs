//! Generic URI grammar and component record.
//!
//! The grammar follows the component split of RFC 3986 appendix B:
//!
//! ```text
//! [scheme ":"] ["//" authority] path ["?" query] ["#" fragment]
//! ```
//!
//! Concrete URI types substitute their own sub-grammars per component,
//! or forbid a component altogether.

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::ValidationError;
use crate::pattern::{Fields, Pattern};
use crate::typed::{TypedString, typed_string_impls};

const DEFAULT_SCHEME: &str = "[^:/?#]+";
const DEFAULT_AUTHORITY: &str = "[^/?#]*";
const DEFAULT_PATH: &str = "[^?#]*";
const DEFAULT_QUERY: &str = "[^#]*";
const DEFAULT_FRAGMENT: &str = ".*";

/// Names of the groups a [`UriGrammar`] reserves for URI components.
pub const COMPONENTS: [&str; 5] = ["scheme", "authority", "path", "query", "fragment"];

/// Builder for URI grammars.
///
/// Starts from the generic RFC 3986 split. Each component can be given a
/// custom sub-pattern (which may declare its own named groups) or be
/// forbidden by passing `None`. The whole grammar is case-insensitive;
/// sub-patterns opt out with `(?-i:...)`.
///
/// # Examples
///
/// ```
/// use typed_strings::UriGrammar;
///
/// let pattern = UriGrammar::new()
///     .scheme("tel")
///     .authority(None)
///     .path(Some(r"(?P<number>\+?[0-9-]+)"))
///     .fragment(None)
///     .build()
///     .unwrap();
///
/// let fields = pattern.captures("TEL:+1-201-555-0123").unwrap();
/// assert_eq!(fields.get("number"), Some("+1-201-555-0123"));
/// assert!(!fields.contains("authority"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriGrammar {
    scheme: Option<String>,
    authority: Option<String>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl UriGrammar {
    /// Creates the generic grammar: every component allowed, scheme optional.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheme: None,
            authority: Some(DEFAULT_AUTHORITY.to_string()),
            path: Some(DEFAULT_PATH.to_string()),
            query: Some(DEFAULT_QUERY.to_string()),
            fragment: Some(DEFAULT_FRAGMENT.to_string()),
        }
    }

    /// Sets the scheme token pattern. A custom scheme is mandatory.
    #[must_use]
    pub fn scheme(mut self, pattern: &str) -> Self {
        self.scheme = Some(pattern.to_string());
        self
    }

    /// Sets the authority pattern, or forbids the authority.
    #[must_use]
    pub fn authority(mut self, pattern: Option<&str>) -> Self {
        self.authority = pattern.map(str::to_string);
        self
    }

    /// Sets the path pattern, or forbids the path.
    #[must_use]
    pub fn path(mut self, pattern: Option<&str>) -> Self {
        self.path = pattern.map(str::to_string);
        self
    }

    /// Sets the query pattern, or forbids the query.
    #[must_use]
    pub fn query(mut self, pattern: Option<&str>) -> Self {
        self.query = pattern.map(str::to_string);
        self
    }

    /// Sets the fragment pattern, or forbids the fragment.
    #[must_use]
    pub fn fragment(mut self, pattern: Option<&str>) -> Self {
        self.fragment = pattern.map(str::to_string);
        self
    }

    /// Returns the grammar as pattern text.
    #[must_use]
    pub fn source(&self) -> String {
        let mut pattern = match &self.scheme {
            Some(scheme) => format!("(?P<scheme>{scheme}):"),
            None => format!("(?:(?P<scheme>{DEFAULT_SCHEME}):)?"),
        };
        if let Some(authority) = &self.authority {
            pattern.push_str(&format!("(?://(?P<authority>{authority}))?"));
        }
        if let Some(path) = &self.path {
            pattern.push_str(&format!("(?P<path>{path})"));
        }
        if let Some(query) = &self.query {
            pattern.push_str(&format!(r"(?:\?(?P<query>{query}))?"));
        }
        if let Some(fragment) = &self.fragment {
            pattern.push_str(&format!("(?:#(?P<fragment>{fragment}))?"));
        }
        format!("(?i:{pattern})")
    }

    /// Compiles the grammar.
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if a sub-pattern is invalid or declares a
    /// group name twice.
    pub fn build(&self) -> Result<Pattern, regex::Error> {
        Pattern::new(&self.source())
    }
}

impl Default for UriGrammar {
    fn default() -> Self {
        Self::new()
    }
}

/// The five components of a URI.
///
/// `None` means the component's separator was absent; `Some("")` means the
/// separator was present with an empty value. The two serialize
/// differently.
///
/// # Examples
///
/// ```
/// use typed_strings::{AnyUri, TypedString};
///
/// let uri = AnyUri::parse("a:b").unwrap();
/// assert_eq!(uri.record().authority, None);
///
/// let uri = AnyUri::parse("a:///b").unwrap();
/// assert_eq!(uri.record().authority.as_deref(), Some(""));
/// assert_eq!(uri.record().path, "/b");
/// assert_eq!(uri.to_string(), "a:///b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UriRecord {
    /// Scheme, lowercased
    pub scheme: Option<String>,
    /// Authority
    pub authority: Option<String>,
    /// Path, possibly empty
    pub path: String,
    /// Query
    pub query: Option<String>,
    /// Fragment
    pub fragment: Option<String>,
}

impl UriRecord {
    /// Moves the URI components out of captured fields.
    ///
    /// Fields left behind are the ones a concrete grammar declared on top
    /// of the components.
    pub fn take_from(fields: &mut Fields) -> Self {
        Self {
            scheme: fields.take("scheme").map(|s| s.to_ascii_lowercase()),
            authority: fields.take("authority"),
            path: fields.take("path").unwrap_or_default(),
            query: fields.take("query"),
            fragment: fields.take("fragment"),
        }
    }

    /// Returns the scheme or an empty string.
    #[must_use]
    pub fn scheme_str(&self) -> &str {
        self.scheme.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for UriRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}:")?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

static ANY_URI: Lazy<Pattern> =
    Lazy::new(|| UriGrammar::new().build().expect("generic URI grammar compiles"));

/// Any URI, split into its components.
///
/// The canonical form is the recomposed record, which differs from the
/// input only by the scheme's case.
///
/// # Examples
///
/// ```
/// use typed_strings::{AnyUri, TypedString};
///
/// let uri = AnyUri::parse("HTTP://example.com/a?b#").unwrap();
/// assert_eq!(uri.scheme(), Some("http"));
/// assert_eq!(uri.fragment(), Some(""));
/// assert_eq!(uri.as_str(), "http://example.com/a?b#");
/// ```
#[derive(Debug, Clone)]
pub struct AnyUri {
    uri: UriRecord,
    normalized: String,
}

impl AnyUri {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.uri
    }

    /// Returns the scheme, if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.uri.scheme.as_deref()
    }

    /// Returns the authority, if present.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.uri.authority.as_deref()
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.uri.path
    }

    /// Returns the query, if present.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.uri.query.as_deref()
    }

    /// Returns the fragment, if present.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.uri.fragment.as_deref()
    }
}

impl TypedString for AnyUri {
    fn pattern() -> &'static Pattern {
        &ANY_URI
    }

    fn from_fields(_input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let uri = UriRecord::take_from(&mut fields);
        let normalized = uri.to_string();
        Ok(Self { uri, normalized })
    }

    fn as_str(&self) -> &str {
        &self.normalized
    }
}

typed_string_impls!(AnyUri);

static SQLITE_URI: Lazy<Pattern> = Lazy::new(|| {
    UriGrammar::new()
        .scheme("sqlite")
        .authority(Some(""))
        .build()
        .expect("sqlite URI grammar compiles")
});

/// A `SQLite` database URI, e.g. `sqlite:///var/db/app.sqlite`.
///
/// Only an empty authority is allowed, so a path after `//` must be
/// absolute. An empty path names an in-memory database.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use typed_strings::{SqliteUri, TypedString};
///
/// let uri = SqliteUri::parse("sqlite:///var/db/app.sqlite").unwrap();
/// assert_eq!(uri.database_path(), Some(Path::new("/var/db/app.sqlite")));
///
/// assert!(SqliteUri::parse("sqlite://").unwrap().is_memory());
/// assert!(SqliteUri::parse("sqlite://host/db").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SqliteUri {
    uri: UriRecord,
    normalized: String,
}

impl SqliteUri {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.uri
    }

    /// Returns true for an in-memory database.
    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.uri.path.is_empty()
    }

    /// Returns the database file path, or `None` for an in-memory database.
    #[must_use]
    pub fn database_path(&self) -> Option<&Path> {
        if self.is_memory() {
            None
        } else {
            Some(Path::new(&self.uri.path))
        }
    }
}

impl TypedString for SqliteUri {
    fn pattern() -> &'static Pattern {
        &SQLITE_URI
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let uri = UriRecord::take_from(&mut fields);
        if uri.authority.is_some() && !uri.path.is_empty() && !uri.path.starts_with('/') {
            return Err(ValidationError::format(input).with_detail("sqlite URIs take no host"));
        }
        let normalized = uri.to_string();
        Ok(Self { uri, normalized })
    }

    fn as_str(&self) -> &str {
        &self.normalized
    }
}

typed_string_impls!(SqliteUri);
