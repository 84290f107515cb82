//! Declared and resolved token values.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{TokenError, TokenResult};
use crate::path::TokenPath;

/// Key under which a token node declares its value.
pub const VALUE_KEY: &str = "$value";
/// Key of a color object that holds its hex string.
pub const HEX_KEY: &str = "hex";

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The terminal form of a token once every alias has been followed.
///
/// Whole numbers serialize as integers, so a token declared as `12` is
/// written back as `12` rather than `12.0`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    /// A numeric value (dimensions, weights, ratios).
    Number(f64),
    /// A string value (hex colors, font families).
    Text(String),
}

impl ResolvedValue {
    /// Get the number, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ResolvedValue::Number(value) => Some(*value),
            ResolvedValue::Text(_) => None,
        }
    }

    /// Get the string, if this is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResolvedValue::Text(value) => Some(value),
            ResolvedValue::Number(_) => None,
        }
    }

    /// A short name of the value kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResolvedValue::Number(_) => "number",
            ResolvedValue::Text(_) => "string",
        }
    }

    /// Convert into a JSON value.
    ///
    /// Numbers that are not finite become `null`; the resolver never
    /// produces them from JSON or TOML sources.
    pub fn to_json(&self) -> Value {
        match self {
            ResolvedValue::Number(value) => number_to_json(*value),
            ResolvedValue::Text(value) => Value::String(value.clone()),
        }
    }
}

/// The integer a whole, exactly representable number stands for.
pub fn as_whole(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        Some(value as i64)
    } else {
        None
    }
}

/// Convert a number to JSON, as an integer when it is whole.
///
/// Numbers that are not finite become `null`.
pub fn number_to_json(value: f64) -> Value {
    match as_whole(value) {
        Some(whole) => Value::from(whole),
        None => serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null),
    }
}

impl Serialize for ResolvedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResolvedValue::Number(value) => match as_whole(*value) {
                Some(whole) => serializer.serialize_i64(whole),
                None => serializer.serialize_f64(*value),
            },
            ResolvedValue::Text(value) => serializer.serialize_str(value),
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedValue::Number(value) => write!(f, "{}", value),
            ResolvedValue::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<f64> for ResolvedValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ResolvedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A declared `$value`, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A concrete number or string.
    Concrete(ResolvedValue),
    /// A reference to another token.
    Alias(TokenPath),
}

impl RawValue {
    /// Classify a declared value.
    ///
    /// `path` names the token that declares the value and is only used in
    /// the error for unsupported shapes.
    pub fn classify(path: &str, value: &Value) -> TokenResult<Self> {
        match value {
            Value::String(text) => Ok(match TokenPath::from_alias(text) {
                Some(target) => RawValue::Alias(target),
                None => RawValue::Concrete(ResolvedValue::Text(text.clone())),
            }),
            Value::Number(number) => number
                .as_f64()
                .map(|n| RawValue::Concrete(ResolvedValue::Number(n)))
                .ok_or_else(|| TokenError::unsupported(path, value)),
            Value::Object(object) => match object.get(HEX_KEY) {
                Some(Value::String(hex)) => Ok(RawValue::Concrete(ResolvedValue::Text(hex.clone()))),
                _ => Err(TokenError::unsupported(path, value)),
            },
            _ => Err(TokenError::unsupported(path, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn color_objects_collapse_to_hex() {
        let value = json!({ "colorSpace": "srgb", "alpha": 1, "hex": "#2563EB" });
        assert_eq!(
            RawValue::classify("Primitive.Colour.Blue-600", &value).unwrap(),
            RawValue::Concrete(ResolvedValue::from("#2563EB"))
        );
    }

    #[test]
    fn booleans_and_arrays_are_rejected() {
        for value in [json!(true), json!([1, 2]), json!(null), json!({ "r": 1 })] {
            let err = RawValue::classify("Broken", &value).unwrap_err();
            assert!(matches!(err, TokenError::UnsupportedValueShape { ref path, .. } if path == "Broken"));
        }
    }

    #[test]
    fn resolved_values_serialize_untagged() {
        assert_eq!(serde_json::to_value(ResolvedValue::Number(16.0)).unwrap(), json!(16));
        assert_eq!(serde_json::to_value(ResolvedValue::Number(0.4)).unwrap(), json!(0.4));
        assert_eq!(serde_json::to_value(ResolvedValue::from("Inter")).unwrap(), json!("Inter"));
    }

    #[test]
    fn whole_numbers_keep_their_integer_form() {
        assert_eq!(ResolvedValue::Number(12.0).to_json(), json!(12));
        assert_eq!(ResolvedValue::Number(-2.0).to_json(), json!(-2));
        assert_eq!(ResolvedValue::Number(1.5).to_json(), json!(1.5));
        assert_eq!(number_to_json(f64::NAN), Value::Null);
        assert_eq!(as_whole(1e300), None);
    }
}
