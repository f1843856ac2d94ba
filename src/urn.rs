//! Uniform Resource Names (RFC 2141) and DOI URIs.

use once_cell::sync::Lazy;

use crate::constants::{DOI_RESOLVER, HANDLE_RESOLVER, ISSN_RESOLVER};
use crate::error::ValidationError;
use crate::pattern::{Fields, Pattern};
use crate::typed::{TypedString, typed_string_impls};
use crate::uri::{UriGrammar, UriRecord};

/// Namespace identifier of a URN.
const NID: &str = "[A-Z0-9][A-Z0-9-]{1,31}";

/// Namespace-specific string of a URN.
const NSS: &str = "[^:]*?";

/// A handle: naming authority and local name, separated by `/`.
///
/// The prefix is restricted to the DOI directory (`10.NNNN`).
const HANDLEID: &str = r"(?P<prefix>10\.[1-9]\d{3}(?:\.\d+)?)/(?P<suffix>.*)";

fn urn_grammar(nid: &str, nss: &str) -> Pattern {
    let path = format!("(?P<nid>{nid}):(?P<nss>{nss})");
    UriGrammar::new()
        .scheme("urn")
        .authority(None)
        .path(Some(&path))
        .build()
        .expect("URN grammar compiles")
}

/// The parts every URN shares.
#[derive(Debug, Clone)]
struct UrnParts {
    uri: UriRecord,
    nid: String,
    nss: String,
    normalized: String,
}

impl UrnParts {
    fn take_from(input: &str, fields: &mut Fields) -> Result<Self, ValidationError> {
        let uri = UriRecord::take_from(fields);
        let nid = fields.require("nid", input)?;
        let nss = fields.take("nss").unwrap_or_default();

        let mut normalized = format!("urn:{nid}:{nss}");
        if let Some(query) = &uri.query {
            normalized.push('?');
            normalized.push_str(query);
        }
        if let Some(fragment) = &uri.fragment {
            normalized.push('#');
            normalized.push_str(fragment);
        }
        Ok(Self {
            uri,
            nid,
            nss,
            normalized,
        })
    }
}

static ANY_URN: Lazy<Pattern> = Lazy::new(|| urn_grammar(NID, NSS));

/// Any URN, e.g. `urn:isbn:0451450523`.
///
/// # Examples
///
/// ```
/// use typed_strings::{AnyUrn, TypedString};
///
/// let urn = AnyUrn::parse("URN:ietf:rfc2141").unwrap();
/// assert_eq!(urn.nid(), "ietf");
/// assert_eq!(urn.nss(), "rfc2141");
/// assert_eq!(urn.as_str(), "urn:ietf:rfc2141");
/// ```
#[derive(Debug, Clone)]
pub struct AnyUrn {
    parts: UrnParts,
}

impl AnyUrn {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.parts.uri
    }

    /// Namespace identifier.
    #[must_use]
    pub fn nid(&self) -> &str {
        &self.parts.nid
    }

    /// Namespace-specific string.
    #[must_use]
    pub fn nss(&self) -> &str {
        &self.parts.nss
    }
}

impl TypedString for AnyUrn {
    fn pattern() -> &'static Pattern {
        &ANY_URN
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let parts = UrnParts::take_from(input, &mut fields)?;
        Ok(Self { parts })
    }

    fn as_str(&self) -> &str {
        &self.parts.normalized
    }
}

typed_string_impls!(AnyUrn);

static ISSN_URN: Lazy<Pattern> = Lazy::new(|| urn_grammar("issn", NSS));

/// A URN in the `issn` namespace (RFC 3044).
///
/// # Examples
///
/// ```
/// use typed_strings::{IssnUrn, TypedString};
///
/// let urn = IssnUrn::parse("urn:ISSN:0167-6423").unwrap();
/// assert_eq!(urn.issn(), "0167-6423");
/// assert_eq!(urn.url(), "https://urn.issn.org/urn:ISSN:0167-6423");
/// ```
#[derive(Debug, Clone)]
pub struct IssnUrn {
    parts: UrnParts,
}

impl IssnUrn {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.parts.uri
    }

    /// The ISSN.
    #[must_use]
    pub fn issn(&self) -> &str {
        &self.parts.nss
    }

    /// Resolver URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{ISSN_RESOLVER}{}", self.parts.normalized)
    }
}

impl TypedString for IssnUrn {
    fn pattern() -> &'static Pattern {
        &ISSN_URN
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let parts = UrnParts::take_from(input, &mut fields)?;
        Ok(Self { parts })
    }

    fn as_str(&self) -> &str {
        &self.parts.normalized
    }
}

typed_string_impls!(IssnUrn);

static HANDLE_URN: Lazy<Pattern> = Lazy::new(|| urn_grammar("hdl", HANDLEID));

/// A URN in the `hdl` namespace, e.g. `urn:hdl:10.1000/182`.
///
/// # Examples
///
/// ```
/// use typed_strings::{HandleUrn, TypedString};
///
/// let urn = HandleUrn::parse("urn:hdl:10.1000/182").unwrap();
/// assert_eq!(urn.prefix(), "10.1000");
/// assert_eq!(urn.suffix(), "182");
/// assert_eq!(urn.url(), "http://hdl.handle.net/10.1000/182");
/// ```
#[derive(Debug, Clone)]
pub struct HandleUrn {
    parts: UrnParts,
    prefix: String,
    suffix: String,
}

impl HandleUrn {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.parts.uri
    }

    /// Naming authority.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Unique local name.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Resolver URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{HANDLE_RESOLVER}{}/{}", self.prefix, self.suffix)
    }
}

impl TypedString for HandleUrn {
    fn pattern() -> &'static Pattern {
        &HANDLE_URN
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let parts = UrnParts::take_from(input, &mut fields)?;
        let prefix = fields.require("prefix", input)?;
        let suffix = fields.take("suffix").unwrap_or_default();
        Ok(Self {
            parts,
            prefix,
            suffix,
        })
    }

    fn as_str(&self) -> &str {
        &self.parts.normalized
    }
}

typed_string_impls!(HandleUrn);

static DOI_URI: Lazy<Pattern> = Lazy::new(|| {
    UriGrammar::new()
        .scheme("doi")
        .authority(None)
        .path(Some(HANDLEID))
        .build()
        .expect("DOI URI grammar compiles")
});

/// A Digital Object Identifier URI, e.g. `doi:10.1000/182`.
///
/// # Examples
///
/// ```
/// use typed_strings::{DoiUri, TypedString};
///
/// let doi = DoiUri::parse("DOI:10.1038/nphys1170").unwrap();
/// assert_eq!(doi.as_str(), "doi:10.1038/nphys1170");
/// assert_eq!(doi.url(), "https://doi.org/10.1038/nphys1170");
/// ```
#[derive(Debug, Clone)]
pub struct DoiUri {
    uri: UriRecord,
    prefix: String,
    suffix: String,
    normalized: String,
}

impl DoiUri {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.uri
    }

    /// Registrant prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Object suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Resolver URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{DOI_RESOLVER}{}/{}", self.prefix, self.suffix)
    }
}

impl TypedString for DoiUri {
    fn pattern() -> &'static Pattern {
        &DOI_URI
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let uri = UriRecord::take_from(&mut fields);
        let prefix = fields.require("prefix", input)?;
        let suffix = fields.take("suffix").unwrap_or_default();
        let normalized = format!("doi:{prefix}/{suffix}");
        Ok(Self {
            uri,
            prefix,
            suffix,
            normalized,
        })
    }

    fn as_str(&self) -> &str {
        &self.normalized
    }
}

typed_string_impls!(DoiUri);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_urn_keeps_query_and_fragment() {
        let urn = AnyUrn::parse("urn:example:a123?q#f").unwrap();
        assert_eq!(urn.nid(), "example");
        assert_eq!(urn.nss(), "a123");
        assert_eq!(urn.record().query.as_deref(), Some("q"));
        assert_eq!(urn.as_str(), "urn:example:a123?q#f");
    }

    #[test]
    fn nid_bounds() {
        assert!(AnyUrn::parse("urn:a:b").is_err());
        assert!(AnyUrn::parse("urn:-ab:b").is_err());
        assert!(AnyUrn::parse(&format!("urn:{}:b", "a".repeat(33))).is_err());
        assert!(AnyUrn::parse(&format!("urn:{}:b", "a".repeat(32))).is_ok());
    }

    #[test]
    fn nss_has_no_colon() {
        assert!(AnyUrn::parse("urn:ietf:rfc:2141").unwrap_err().is_format());
    }

    #[test]
    fn issn_namespace_is_fixed() {
        assert!(IssnUrn::parse("urn:issn:1234-5679").is_ok());
        assert!(IssnUrn::parse("urn:isbn:0451450523").unwrap_err().is_format());
    }

    #[test]
    fn handle_requires_doi_prefix() {
        let urn = HandleUrn::parse("urn:hdl:10.1000.10/abc/def").unwrap();
        assert_eq!(urn.prefix(), "10.1000.10");
        assert_eq!(urn.suffix(), "abc/def");
        assert!(HandleUrn::parse("urn:hdl:11.1000/182").is_err());
        assert!(HandleUrn::parse("urn:hdl:10.0100/182").is_err());
    }

    #[test]
    fn doi_round_trip() {
        let doi = DoiUri::parse("doi:10.1000/182").unwrap();
        assert_eq!(doi.prefix(), "10.1000");
        assert_eq!(doi.suffix(), "182");
        assert_eq!(DoiUri::parse(doi.as_str()).unwrap(), doi);
        assert!(DoiUri::parse("doi://10.1000/182").is_err());
    }
}
