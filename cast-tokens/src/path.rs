//! Dot-separated token paths and the `{…}` alias syntax.

use std::fmt;

/// Opening delimiter of an alias string.
pub const ALIAS_OPEN: char = '{';
/// Closing delimiter of an alias string.
pub const ALIAS_CLOSE: char = '}';

/// A dot-separated path into a token tree, e.g. `Semantic.Colour.Primary`.
///
/// Segments may contain spaces (`Semantic.Font family.Font-Brand`); only the
/// dot separates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenPath {
    segments: Vec<String>,
}

impl TokenPath {
    /// Split a dot path into segments.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Parse the path inside an alias string.
    ///
    /// Returns `None` if `value` is not wrapped in `{` and `}`.
    pub fn from_alias(value: &str) -> Option<Self> {
        alias_target(value).map(Self::parse)
    }

    /// The individual segments of this path.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Render this path as an alias string.
    pub fn to_alias(&self) -> String {
        format!("{}{}{}", ALIAS_OPEN, self, ALIAS_CLOSE)
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for TokenPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

/// Check whether a string uses the alias syntax.
pub fn is_alias(value: &str) -> bool {
    alias_target(value).is_some()
}

/// The text between the alias delimiters, if `value` is an alias.
pub fn alias_target(value: &str) -> Option<&str> {
    value
        .strip_prefix(ALIAS_OPEN)
        .and_then(|rest| rest.strip_suffix(ALIAS_CLOSE))
}
