//! # Theme Error Types
//!
//! Errors raised while assembling, merging, loading, or writing themes.
//! Token resolution failures are carried through unchanged as
//! [ThemeError::Token].

use std::path::PathBuf;
use thiserror::Error;

use cast_tokens::TokenError;

/// Errors that can occur in the theme engine.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A token could not be resolved.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// A sourced field resolved to a value of the wrong kind.
    #[error("Field '{field}' expects a {expected} but token \"{path}\" resolved to a {found}")]
    TypeMismatch {
        /// The theme field being assembled.
        field: String,
        /// The token path it is sourced from.
        path: String,
        /// The kind the schema declares.
        expected: &'static str,
        /// The kind the token resolved to.
        found: &'static str,
    },

    /// A derived field depends on a field that never resolves before it.
    #[error("Field '{field}' depends on '{dependency}', which is not resolved at that point")]
    UnresolvedDependency {
        /// The derived field.
        field: String,
        /// The field it copies from.
        dependency: String,
    },

    /// A string in a finished theme still uses the alias syntax.
    #[error("Field '{field}' holds an unresolved token reference: {value}")]
    UnresolvedAlias {
        /// Dot path of the offending field.
        field: String,
        /// The alias string.
        value: String,
    },

    /// A value does not have the shape of a theme.
    #[error("Invalid theme shape: {details}")]
    Shape {
        /// What was wrong with the shape.
        details: String,
    },

    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// The process-wide base theme was already built or installed.
    #[error("The base theme is already initialized")]
    BaseThemeAlreadyInitialized,

    /// Failed to read a file.
    #[error("Failed to read {path:?}: {source}")]
    ReadError {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file or create a directory.
    #[error("Failed to write {path:?}: {source}")]
    WriteError {
        /// The file or directory being written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a theme, override, or configuration file.
    #[error("Failed to parse {path:?}: {details}")]
    ParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// The file extension is not one we can parse.
    #[error("Unsupported file format: {path:?} (use .json or .toml)")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// Error serializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a shape error.
    pub fn shape(details: impl Into<String>) -> Self {
        Self::Shape {
            details: details.into(),
        }
    }

    /// Create a read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}
