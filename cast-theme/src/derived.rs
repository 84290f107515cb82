//! # Derived Themes
//!
//! A [DerivedTheme] is the result of merging overrides onto a base theme. It
//! keeps the merged document exactly as the merge produced it: an override
//! may replace a whole record with a string, change a number into a color,
//! or add keys the schema has never heard of, and deriving still succeeds.
//!
//! The one rule a derived theme always upholds is full resolution. A string
//! that still uses the `{…}` reference syntax is rejected with
//! [ThemeError::UnresolvedAlias](crate::ThemeError::UnresolvedAlias).
//!
//! Typed access goes through an explicit check against the schema:
//!
//! ```rust
//! use cast_theme::{create_theme, ThemeError, ThemeOverrides};
//!
//! let derived = create_theme(&ThemeOverrides::new().with("component.card", "none"), None).unwrap();
//! assert_eq!(derived.get_str("component.card"), Some("none"));
//! assert!(matches!(derived.to_theme(), Err(ThemeError::Shape { .. })));
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::error::ThemeResult;
use crate::schema::{ensure_resolved, Theme};

/// A theme derived from a base theme by merging overrides.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DerivedTheme {
    document: Value,
}

impl DerivedTheme {
    /// Wrap a merged document, checking that it holds no unresolved token
    /// reference.
    pub fn from_value(document: Value) -> ThemeResult<Self> {
        ensure_resolved(&document)?;
        Ok(Self { document })
    }

    /// The theme name, if the document has a string `name`.
    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    /// The value at a dot path such as `semantic.color.primary`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.document, |node, segment| node.get(segment))
    }

    /// The number at a dot path.
    pub fn get_number(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(Value::as_f64)
    }

    /// The string at a dot path.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// The merged document.
    pub fn as_value(&self) -> &Value {
        &self.document
    }

    /// Take the merged document.
    pub fn into_value(self) -> Value {
        self.document
    }

    /// Check the document against the schema and build a typed [Theme].
    ///
    /// Fails with [ThemeError::Shape](crate::ThemeError::Shape) if an
    /// override removed a schema field or changed its type.
    pub fn to_theme(&self) -> ThemeResult<Theme> {
        Theme::from_value(self.document.clone())
    }

    /// Consuming form of [to_theme](Self::to_theme).
    pub fn into_theme(self) -> ThemeResult<Theme> {
        Theme::from_value(self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use serde_json::json;

    #[test]
    fn reshaped_documents_are_kept_as_merged() {
        let derived = DerivedTheme::from_value(json!({
            "name": "odd",
            "semantic": { "color": { "primary": 5 } }
        }))
        .unwrap();

        assert_eq!(derived.name(), Some("odd"));
        assert_eq!(derived.get_number("semantic.color.primary"), Some(5.0));
        assert_eq!(derived.get_str("semantic.color.primary"), None);
        assert_eq!(derived.get("semantic.color.primary.deeper"), None);
        assert!(matches!(derived.to_theme(), Err(ThemeError::Shape { .. })));
    }

    #[test]
    fn unresolved_references_are_rejected() {
        let err = DerivedTheme::from_value(json!({ "semantic": { "color": { "primary": "{A.B}" } } })).unwrap_err();
        assert!(matches!(err, ThemeError::UnresolvedAlias { ref field, .. } if field == "semantic.color.primary"));
    }

    #[test]
    fn serializes_as_the_bare_document() {
        let document = json!({ "name": "x", "extra": [1, 2] });
        let derived = DerivedTheme::from_value(document.clone()).unwrap();
        assert_eq!(serde_json::to_value(&derived).unwrap(), document);
        assert_eq!(derived.into_value(), document);
    }
}
