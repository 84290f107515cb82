//! Partial theme overrides.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{ThemeError, ThemeResult};
use crate::schema::{read_document, Theme};

/// A partial theme tree to merge onto a base theme.
///
/// Any subset of the theme's keys may be given, using the same camelCase
/// names as the theme's value form. A complete theme is also a valid
/// override document.
///
/// # Examples
///
/// ```rust
/// use cast_theme::ThemeOverrides;
///
/// let overrides = ThemeOverrides::new()
///     .with("name", "brand")
///     .with("semantic.color.primary", "#FF0000");
///
/// assert_eq!(overrides.name(), Some("brand"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOverrides {
    root: Value,
}

impl ThemeOverrides {
    /// An empty override document.
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Wrap an override tree. The root must be an object.
    pub fn from_value(value: Value) -> ThemeResult<Self> {
        match value {
            Value::Object(_) => Ok(Self { root: value }),
            other => Err(ThemeError::shape(format!("overrides must be an object, found {}", other))),
        }
    }

    /// Parse overrides from JSON content.
    pub fn from_json_str(content: &str) -> ThemeResult<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ThemeError::parse_error("<json>", e.to_string()))?;
        Self::from_value(value)
    }

    /// Parse overrides from TOML content.
    pub fn from_toml_str(content: &str) -> ThemeResult<Self> {
        let value: Value =
            toml::from_str(content).map_err(|e| ThemeError::parse_error("<toml>", e.to_string()))?;
        Self::from_value(value)
    }

    /// Load overrides from a `.json` or `.toml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let value = read_document(path)?;
        log::debug!("Loaded theme overrides from {:?}", path);
        Self::from_value(value)
    }

    /// Use a complete theme as an override document.
    pub fn from_theme(theme: &Theme) -> ThemeResult<Self> {
        Self::from_value(theme.to_value()?)
    }

    /// Set the value at a dot path such as `semantic.color.primary`.
    ///
    /// Intermediate objects are created as needed; a non-object value in the
    /// way is replaced by an object.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &mut Self {
        let segments: Vec<&str> = path.split('.').collect();
        match &mut self.root {
            Value::Object(root) => insert_path(root, &segments, value.into()),
            other => {
                let mut root = Map::new();
                insert_path(&mut root, &segments, value.into());
                *other = Value::Object(root);
            },
        }
        self
    }

    /// Builder form of [set](Self::set).
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }

    /// The `name` the overrides give the derived theme, if any.
    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    /// Whether the document has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.as_object().map_or(true, Map::is_empty)
    }

    /// The override tree.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Take the override tree.
    pub fn into_value(self) -> Value {
        self.root
    }
}

impl Default for ThemeOverrides {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_path(map: &mut Map<String, Value>, segments: &[&str], value: Value) {
    match segments {
        [] => {},
        [last] => {
            map.insert(last.to_string(), value);
        },
        [head, rest @ ..] => {
            let child = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            match child {
                Value::Object(inner) => insert_path(inner, rest, value),
                leaf => {
                    let mut inner = Map::new();
                    insert_path(&mut inner, rest, value);
                    *leaf = Value::Object(inner);
                },
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_builds_nested_objects() {
        let mut overrides = ThemeOverrides::new();
        overrides
            .set("semantic.color.primary", "#FF0000")
            .set("semantic.color.onPrimary", "#FFFFFF")
            .set("component.button.cornerRadius", 12.0);
        assert_eq!(
            overrides.as_value(),
            &json!({
                "semantic": { "color": { "primary": "#FF0000", "onPrimary": "#FFFFFF" } },
                "component": { "button": { "cornerRadius": 12.0 } }
            })
        );
    }

    #[test]
    fn set_replaces_leaves_in_the_way() {
        let overrides = ThemeOverrides::new().with("a", 1).with("a.b", 2);
        assert_eq!(overrides.as_value(), &json!({ "a": { "b": 2 } }));

        let deeper = overrides.with("a.b.c.d", "x").with("a.e", true);
        assert_eq!(deeper.as_value(), &json!({ "a": { "b": { "c": { "d": "x" } }, "e": true } }));
    }

    #[test]
    fn set_keeps_siblings_of_existing_objects() {
        let overrides = ThemeOverrides::from_json_str(r##"{ "semantic": { "color": { "primary": "#000" } } }"##)
            .unwrap()
            .with("semantic.color.secondary", "#111");
        assert_eq!(
            overrides.as_value(),
            &json!({ "semantic": { "color": { "primary": "#000", "secondary": "#111" } } })
        );
    }

    #[test]
    fn root_must_be_an_object() {
        assert!(matches!(
            ThemeOverrides::from_json_str("[1]"),
            Err(ThemeError::Shape { .. })
        ));
        assert!(ThemeOverrides::from_json_str("{}").unwrap().is_empty());
    }

    #[test]
    fn toml_overrides_use_theme_keys() {
        let overrides = ThemeOverrides::from_toml_str(
            r##"
            name = "brand"

            [semantic.color]
            primary = "#FF0000"
            "##,
        )
        .unwrap();
        assert_eq!(overrides.name(), Some("brand"));
        assert_eq!(overrides.as_value()["semantic"]["color"]["primary"], json!("#FF0000"));
    }
}
