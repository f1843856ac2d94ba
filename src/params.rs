//! Parameter segments such as `a=b;C=D`.

use std::collections::BTreeMap;

use crate::error::ParameterError;

/// Parameters parsed from a delimited segment.
///
/// Names are case-folded to lowercase; values are kept verbatim. Stored
/// sorted by name for consistent normalization.
///
/// # Examples
///
/// ```
/// use typed_strings::Parameters;
///
/// let params = Parameters::parse("a=b;C=D", ';').unwrap();
/// assert_eq!(params.get("a"), Some("b"));
/// assert_eq!(params.get("c"), Some("D"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Parameters {
    params: BTreeMap<String, String>,
}

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `name=value` pairs separated by `sep`.
    ///
    /// Whitespace around pairs is ignored and blank segments are skipped.
    /// A separator inside a double-quoted value does not split it. A pair
    /// without `=` has an empty value.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError` if a name is empty or repeated.
    pub fn parse(input: &str, sep: char) -> Result<Self, ParameterError> {
        let mut params = BTreeMap::new();

        for pair in split_unquoted(input, sep) {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }

            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let name = name.trim().to_lowercase();
            if name.is_empty() {
                return Err(ParameterError::InvalidParamName {
                    name,
                    reason: "parameter name cannot be empty",
                });
            }

            if params.contains_key(&name) {
                return Err(ParameterError::DuplicateParam { name });
            }
            params.insert(name, value.trim().to_string());
        }

        Ok(Self { params })
    }

    /// Returns the value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns an iterator over the parameter names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Joins the parameters back with `sep`.
    #[must_use]
    pub fn join(&self, sep: char) -> String {
        let mut out = String::new();
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                out.push(sep);
            }
            out.push_str(k);
            out.push('=');
            out.push_str(v);
        }
        out
    }
}

fn split_unquoted(input: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
        } else if quoted && c == '\\' {
            escaped = true;
        } else if c == '"' {
            quoted = !quoted;
        } else if c == sep && !quoted {
            parts.push(&input[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&input[start..]);
    parts
}
