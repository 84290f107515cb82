//! Deep merge of override trees onto theme values.
//!
//! Objects merge key by key; anything else in the override (strings,
//! numbers, booleans, arrays) replaces the base value outright. A `null`
//! override means "keep the base value" and is dropped wherever it appears.
//! Neither input is modified.

use serde_json::{Map, Value};

use crate::derived::DerivedTheme;
use crate::error::ThemeResult;
use crate::overrides::ThemeOverrides;
use crate::schema::Theme;

/// Merge `overrides` onto `base`, returning a new value.
///
/// ```rust
/// use cast_theme::merge::merge;
/// use serde_json::json;
///
/// let base = json!({ "a": { "x": 1, "y": 2 }, "list": [1, 2, 3] });
/// let merged = merge(&base, &json!({ "a": { "x": 9 }, "list": [9] }));
/// assert_eq!(merged, json!({ "a": { "x": 9, "y": 2 }, "list": [9] }));
/// ```
pub fn merge(base: &Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => Value::Object(merge_objects(base, overrides)),
        (_, Value::Null) => base.clone(),
        (_, replacement) => without_nulls(replacement),
    }
}

fn merge_objects(base: &Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overrides {
        if value.is_null() {
            continue;
        }
        let next = match merged.get(key) {
            Some(existing) => merge(existing, value),
            None => without_nulls(value),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

/// Copy `value`, dropping `null` entries from every object inside it.
fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, child)| !child.is_null())
                .map(|(key, child)| (key.clone(), without_nulls(child)))
                .collect(),
        ),
        other => other.clone(),
    }
}

impl Theme {
    /// Derive a new theme by merging `overrides` onto this one.
    ///
    /// The merge never fails on the shape of the overrides; a malformed
    /// override simply replaces the base value. Only an unresolved `{…}`
    /// reference is rejected. Use [DerivedTheme::to_theme] for typed access.
    pub fn merged(&self, overrides: &ThemeOverrides) -> ThemeResult<DerivedTheme> {
        let base = self.to_value()?;
        DerivedTheme::from_value(merge(&base, overrides.as_value()))
    }
}
