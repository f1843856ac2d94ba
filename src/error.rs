//! Error types for typed string validation.

use std::fmt;

/// Category of a validation failure.
///
/// The category is exposed as a stable string through [`ErrorKind::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic validation failure with no finer classification
    Invalid,
    /// Input does not match the grammar
    Format,
    /// Input has the wrong length for a fixed-length identifier
    Length,
    /// Input parses but breaks a semantic rule
    Content,
    /// Input fails a checksum (a kind of content failure)
    Checksum,
}

impl ErrorKind {
    /// Returns the stable discriminant of this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Format => "format",
            Self::Length => "length",
            Self::Content => "content",
            Self::Checksum => "checksum",
        }
    }

    /// Returns true for content failures, checksum failures included.
    #[must_use]
    pub const fn is_content(self) -> bool {
        matches!(self, Self::Content | Self::Checksum)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error raised when a raw string cannot become a typed string.
///
/// Always carries the offending input so callers can report it without
/// re-parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The input that failed validation
    pub value: String,
    /// The failure category
    pub kind: ErrorKind,
    /// Optional human-readable detail
    pub detail: Option<String>,
}

impl ValidationError {
    /// Creates an error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind,
            detail: None,
        }
    }

    /// Creates a generic `Invalid` error.
    #[must_use]
    pub fn invalid(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::Invalid, value)
    }

    /// Creates a `Format` error.
    #[must_use]
    pub fn format(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format, value)
    }

    /// Creates a `Length` error.
    #[must_use]
    pub fn length(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::Length, value)
    }

    /// Creates a `Content` error.
    #[must_use]
    pub fn content(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::Content, value)
    }

    /// Creates a `Checksum` error.
    #[must_use]
    pub fn checksum(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::Checksum, value)
    }

    /// Attaches a detail message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Returns the stable discriminant of this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Returns true if the input did not match the grammar.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self.kind, ErrorKind::Format)
    }

    /// Returns true for content and checksum failures.
    #[must_use]
    pub const fn is_content(&self) -> bool {
        self.kind.is_content()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Invalid => write!(f, "invalid value '{}'", self.value)?,
            ErrorKind::Format => write!(f, "'{}' does not match the expected format", self.value)?,
            ErrorKind::Length => write!(f, "'{}' has an invalid length", self.value)?,
            ErrorKind::Content => write!(f, "'{}' has invalid content", self.value)?,
            ErrorKind::Checksum => write!(f, "'{}' fails its checksum", self.value)?,
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Errors for parameter segment parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// Invalid parameter name
    InvalidParamName {
        /// The invalid name
        name: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Duplicate parameter
    DuplicateParam {
        /// The duplicated name
        name: String,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParamName { name, reason } => {
                write!(f, "invalid parameter name '{name}': {reason}")
            }
            Self::DuplicateParam { name } => {
                write!(f, "duplicate parameter '{name}'")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Failures reported by an identifier [`Algorithm`](crate::Algorithm).
///
/// Each recognized variant carries the context message of the failure, if
/// any. [`AlgorithmError::Other`] covers failures outside the classification
/// table and is never reclassified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Check digit mismatch
    InvalidChecksum(Option<String>),
    /// Characters or structure not allowed
    InvalidFormat(Option<String>),
    /// A component (prefix, region, date) is not valid
    InvalidComponent(Option<String>),
    /// Wrong number of characters
    InvalidLength(Option<String>),
    /// Any other recognized validation failure
    Invalid(Option<String>),
    /// Unclassified failure
    Other(String),
}

impl AlgorithmError {
    /// Returns the context message carried by a recognized failure.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidChecksum(ctx)
            | Self::InvalidFormat(ctx)
            | Self::InvalidComponent(ctx)
            | Self::InvalidLength(ctx)
            | Self::Invalid(ctx) => ctx.as_deref(),
            Self::Other(_) => None,
        }
    }

    /// Returns the kind a recognized failure maps to, or `None` for
    /// [`AlgorithmError::Other`].
    #[must_use]
    pub const fn classify(&self) -> Option<ErrorKind> {
        match self {
            Self::InvalidChecksum(_) => Some(ErrorKind::Checksum),
            Self::InvalidFormat(_) => Some(ErrorKind::Format),
            Self::InvalidComponent(_) => Some(ErrorKind::Content),
            Self::InvalidLength(_) => Some(ErrorKind::Length),
            Self::Invalid(_) => Some(ErrorKind::Invalid),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidChecksum(_) => "the number's checksum or check digit is invalid",
            Self::InvalidFormat(_) => "the provided number has an invalid format",
            Self::InvalidComponent(_) => "one of the parts of the number is invalid",
            Self::InvalidLength(_) => "the number has an invalid length",
            Self::Invalid(_) => "the number is invalid",
            Self::Other(message) => return write!(f, "algorithm failure: {message}"),
        };
        match self.context() {
            Some(ctx) => write!(f, "{label} ({ctx})"),
            None => f.write_str(label),
        }
    }
}

impl std::error::Error for AlgorithmError {}

/// Translates an algorithm failure into a [`ValidationError`].
///
/// Recognized failures are returned in `Ok` with `value` attached and the
/// failure's context message as detail. Unrecognized failures come back
/// unchanged in `Err`.
///
/// # Errors
///
/// Returns the original `AlgorithmError` when it has no mapping.
///
/// # Examples
///
/// ```
/// use typed_strings::{reraise, AlgorithmError, ErrorKind};
///
/// let err = reraise(AlgorithmError::InvalidChecksum(None), "0378-5954").unwrap();
/// assert_eq!(err.kind, ErrorKind::Checksum);
/// assert_eq!(err.value, "0378-5954");
///
/// let other = AlgorithmError::Other("boom".into());
/// assert_eq!(reraise(other.clone(), "x"), Err(other));
/// ```
pub fn reraise(error: AlgorithmError, value: &str) -> Result<ValidationError, AlgorithmError> {
    let Some(kind) = error.classify() else {
        tracing::debug!(value, %error, "passing through unclassified algorithm error");
        return Err(error);
    };

    let mut mapped = ValidationError::new(kind, value);
    mapped.detail = error.context().map(str::to_string);
    tracing::trace!(value, code = kind.code(), "reclassified algorithm error");
    Ok(mapped)
}

/// Errors from collaborator-backed identifier types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// A classified validation failure
    Invalid(ValidationError),
    /// An unclassified algorithm failure, passed through unchanged
    Algorithm(AlgorithmError),
}

impl IdentifierError {
    /// Returns the classified error, if this is one.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Algorithm(_) => None,
        }
    }
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{e}"),
            Self::Algorithm(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for IdentifierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Algorithm(e) => Some(e),
        }
    }
}

impl From<ValidationError> for IdentifierError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

impl From<AlgorithmError> for IdentifierError {
    fn from(e: AlgorithmError) -> Self {
        Self::Algorithm(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ErrorKind::Invalid.code(), "invalid");
        assert_eq!(ErrorKind::Format.code(), "format");
        assert_eq!(ErrorKind::Length.code(), "length");
        assert_eq!(ErrorKind::Content.code(), "content");
        assert_eq!(ErrorKind::Checksum.code(), "checksum");
    }

    #[test]
    fn checksum_is_content() {
        assert!(ErrorKind::Checksum.is_content());
        assert!(ErrorKind::Content.is_content());
        assert!(!ErrorKind::Format.is_content());
        assert!(ValidationError::checksum("x").is_content());
    }

    #[test]
    fn display_includes_value_and_detail() {
        let err = ValidationError::content("geo:1,2;u=1;u=2").with_detail("'u' repeated");
        let msg = err.to_string();
        assert!(msg.contains("geo:1,2;u=1;u=2"));
        assert!(msg.ends_with(": 'u' repeated"));
    }

    #[test]
    fn reraise_maps_every_recognized_kind() {
        let table = [
            (AlgorithmError::InvalidChecksum(None), ErrorKind::Checksum),
            (AlgorithmError::InvalidFormat(None), ErrorKind::Format),
            (AlgorithmError::InvalidComponent(None), ErrorKind::Content),
            (AlgorithmError::InvalidLength(None), ErrorKind::Length),
            (AlgorithmError::Invalid(None), ErrorKind::Invalid),
        ];
        for (error, kind) in table {
            let mapped = reraise(error, "value").unwrap();
            assert_eq!(mapped.kind, kind);
            assert_eq!(mapped.value, "value");
            assert_eq!(mapped.detail, None);
        }
    }

    #[test]
    fn reraise_preserves_context_as_detail() {
        let error = AlgorithmError::InvalidComponent(Some("unknown prefix".into()));
        let mapped = reraise(error, "9770000000000").unwrap();
        assert_eq!(mapped.detail.as_deref(), Some("unknown prefix"));
    }

    #[test]
    fn reraise_passes_unknown_through() {
        let error = AlgorithmError::Other("table not loaded".into());
        assert_eq!(reraise(error.clone(), "value"), Err(error));
    }

    #[test]
    fn parameter_error_display() {
        let err = ParameterError::DuplicateParam { name: "crs".into() };
        assert_eq!(err.to_string(), "duplicate parameter 'crs'");
    }
}
