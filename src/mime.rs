//! Media types and `Content-Type` values (RFC 2045, RFC 7231).

use once_cell::sync::Lazy;

use crate::error::ValidationError;
use crate::params::Parameters;
use crate::pattern::{Fields, Pattern};
use crate::typed::{TypedString, typed_string_impls};

/// Registered top-level media types.
pub const MEDIA_TYPES: [&str; 11] = [
    "application",
    "audio",
    "chemical",
    "example",
    "font",
    "image",
    "message",
    "model",
    "multipart",
    "text",
    "video",
];

/// Structured syntax suffixes (RFC 3023, RFC 6839).
pub const MEDIA_SUFFIXES: [&str; 14] = [
    "ber",
    "cbor",
    "cbor-seq",
    "der",
    "fastinfoset",
    "gzip",
    "json",
    "json-seq",
    "jwt",
    "sqlite3",
    "tlv",
    "xml",
    "wbxml",
    "zip",
];

const TOKEN: &str = "[A-Z0-9.-]+";
const OWS: &str = "[ \t]*";
const PARAM_TOKEN: &str = r"[A-Z0-9!#$%&'*+.^_`|~-]+";
const QUOTED: &str = r#""(?:[^"\\]|\\.)*""#;

fn media_type_source() -> String {
    // Longer suffixes first, so `json-seq` is not cut at `json`.
    let mut suffixes = MEDIA_SUFFIXES;
    suffixes.sort_by_key(|s| std::cmp::Reverse(s.len()));
    format!(
        r"(?P<type>{}|x-{TOKEN})/(?P<subtype>{TOKEN})(?:\+(?P<suffix>{}))?",
        MEDIA_TYPES.join("|"),
        suffixes.join("|"),
    )
}

static MEDIA_TYPE: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(&format!("(?i:{})", media_type_source())).expect("media type grammar compiles")
});

static CONTENT_TYPE: Lazy<Pattern> = Lazy::new(|| {
    let param = format!("(?:;{OWS}{PARAM_TOKEN}=(?:{PARAM_TOKEN}|{QUOTED}))");
    Pattern::new(&format!(
        "(?i:{}(?P<params>{param}*))",
        media_type_source()
    ))
    .expect("content type grammar compiles")
});

/// A media type such as `application/ld+json`.
///
/// Case-insensitive; the canonical form is lowercase.
///
/// # Examples
///
/// ```
/// use typed_strings::{MediaType, TypedString};
///
/// let mime = MediaType::parse("Application/LD+JSON").unwrap();
/// assert_eq!(mime.top_level(), "application");
/// assert_eq!(mime.subtype(), "ld");
/// assert_eq!(mime.suffix(), Some("json"));
/// assert_eq!(mime.as_str(), "application/ld+json");
/// ```
#[derive(Debug, Clone)]
pub struct MediaType {
    top_level: String,
    subtype: String,
    suffix: Option<String>,
    normalized: String,
}

impl MediaType {
    fn from_parts(top_level: &str, subtype: &str, suffix: Option<&str>) -> Self {
        let top_level = top_level.to_ascii_lowercase();
        let subtype = subtype.to_ascii_lowercase();
        let suffix = suffix.map(str::to_ascii_lowercase);
        let normalized = match &suffix {
            Some(suffix) => format!("{top_level}/{subtype}+{suffix}"),
            None => format!("{top_level}/{subtype}"),
        };
        Self {
            top_level,
            subtype,
            suffix,
            normalized,
        }
    }

    /// Top-level type, e.g. `text`.
    #[must_use]
    pub fn top_level(&self) -> &str {
        &self.top_level
    }

    /// Subtype, without the suffix.
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Structured syntax suffix, if any.
    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// True for an unregistered `x-` top-level type.
    #[must_use]
    pub fn is_experimental(&self) -> bool {
        self.top_level.starts_with("x-")
    }
}

impl TypedString for MediaType {
    fn pattern() -> &'static Pattern {
        &MEDIA_TYPE
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let top_level = fields.require("type", input)?;
        let subtype = fields.require("subtype", input)?;
        let suffix = fields.take("suffix");
        Ok(Self::from_parts(&top_level, &subtype, suffix.as_deref()))
    }

    fn as_str(&self) -> &str {
        &self.normalized
    }
}

typed_string_impls!(MediaType);

/// A `Content-Type` header value: a media type plus parameters.
///
/// Parameter names are case-folded; values are kept as written, quotes
/// included.
///
/// # Examples
///
/// ```
/// use typed_strings::{ContentType, TypedString};
///
/// let ctype = ContentType::parse("Text/HTML; Charset=UTF-8").unwrap();
/// assert_eq!(ctype.params().get("charset"), Some("UTF-8"));
/// assert_eq!(ctype.media_type().as_str(), "text/html");
/// assert_eq!(ctype.as_str(), "text/html;charset=UTF-8");
/// ```
#[derive(Debug, Clone)]
pub struct ContentType {
    media_type: MediaType,
    params: Parameters,
    normalized: String,
}

impl ContentType {
    /// The media type without parameters.
    #[must_use]
    pub const fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// Parameters, keyed by lowercase name.
    #[must_use]
    pub const fn params(&self) -> &Parameters {
        &self.params
    }
}

impl TypedString for ContentType {
    fn pattern() -> &'static Pattern {
        &CONTENT_TYPE
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let top_level = fields.require("type", input)?;
        let subtype = fields.require("subtype", input)?;
        let suffix = fields.take("suffix");
        let media_type = MediaType::from_parts(&top_level, &subtype, suffix.as_deref());

        let params = Parameters::parse(&fields.take("params").unwrap_or_default(), ';')
            .map_err(|e| ValidationError::content(input).with_detail(e.to_string()))?;

        let mut normalized = media_type.as_str().to_string();
        if !params.is_empty() {
            normalized.push(';');
            normalized.push_str(&params.join(';'));
        }
        Ok(Self {
            media_type,
            params,
            normalized,
        })
    }

    fn as_str(&self) -> &str {
        &self.normalized
    }
}

typed_string_impls!(ContentType);
