//! Schema descriptions of typed strings.

/// JSON Schema fragment describing a typed string.
///
/// `schema_type` is always `"string"`. Grammar-backed types fill in
/// `pattern`; identifier types fill in `title` and `description`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StringSchema {
    /// Schema type
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub schema_type: &'static str,
    /// Regex pattern with group names erased
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pattern: Option<String>,
    /// Title
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub title: Option<String>,
    /// Description
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
}

impl StringSchema {
    /// Creates a bare string schema.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            schema_type: "string",
            pattern: None,
            title: None,
            description: None,
        }
    }

    /// Creates a string schema constrained by a pattern.
    #[must_use]
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::new()
        }
    }

    /// Sets the title and description.
    #[must_use]
    pub fn described(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.description = Some(description.into());
        self
    }
}

impl Default for StringSchema {
    fn default() -> Self {
        Self::new()
    }
}
