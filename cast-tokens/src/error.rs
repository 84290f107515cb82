//! Token loading and resolution errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a token tree or resolving a token.
///
/// Every resolution error is fatal to the lookup that raised it. Nothing in
/// this crate falls back to a default value.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A segment of a dot path does not exist in the tree.
    #[error("Cannot resolve token reference {reference} (failed at \"{segment}\")")]
    PathNotFound {
        /// The reference as it was written, e.g. `{Semantic.Colour.Primary}`.
        reference: String,
        /// The first segment that could not be found.
        segment: String,
    },

    /// A path addresses a node that does not declare a `$value`.
    #[error("Token at \"{path}\" has no $value")]
    NoValueAtPath {
        /// The dot path of the node.
        path: String,
    },

    /// An alias chain revisits a token that is already being resolved.
    #[error("Cyclic token reference: {}", .chain.join(" -> "))]
    CyclicReference {
        /// The token paths in the order they were visited, ending with the
        /// path that closed the cycle.
        chain: Vec<String>,
    },

    /// A declared value is not a number, string, color object, or alias.
    #[error("Unexpected token value at \"{path}\": {found}")]
    UnsupportedValueShape {
        /// The dot path of the token holding the value (empty for inline values).
        path: String,
        /// The offending value, rendered as JSON.
        found: String,
    },

    /// The root of a token document is not a mapping.
    #[error("Token tree root must be an object, found {0}")]
    InvalidRoot(String),

    /// Failed to read a token file.
    #[error("Failed to read token file {0:?}: {1}")]
    ReadError(PathBuf, std::io::Error),

    /// Failed to parse a token file.
    #[error("Failed to parse token file {0:?}: {1}")]
    ParseError(PathBuf, String),

    /// The token file extension is not one we can parse.
    #[error("Unsupported token file format: {0:?} (use .json or .toml)")]
    UnsupportedFormat(PathBuf),
}

/// Result type alias for token operations.
pub type TokenResult<T> = Result<T, TokenError>;

impl TokenError {
    /// Create a path-not-found error.
    pub fn path_not_found(reference: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::PathNotFound {
            reference: reference.into(),
            segment: segment.into(),
        }
    }

    /// Create a no-value error.
    pub fn no_value(path: impl Into<String>) -> Self {
        Self::NoValueAtPath { path: path.into() }
    }

    /// Create an unsupported-shape error for the given value.
    pub fn unsupported(path: impl Into<String>, found: &serde_json::Value) -> Self {
        Self::UnsupportedValueShape {
            path: path.into(),
            found: found.to_string(),
        }
    }
}
