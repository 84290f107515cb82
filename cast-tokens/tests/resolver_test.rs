//! Tests for loading token files and resolving them end to end

use cast_tokens::{resolve_all, resolve_at_path, ResolvedValue, TokenError, TokenTree};
use std::fs;

const TOKENS: &str = r##"{
  "Primitive": {
    "Colour": {
      "Blue-600": { "$type": "color", "$value": { "colorSpace": "srgb", "alpha": 1, "hex": "#2563EB" } },
      "White": { "$type": "color", "$value": { "colorSpace": "srgb", "alpha": 1, "hex": "#FFFFFF" } }
    },
    "Spacing": { "100": { "$type": "number", "$value": 8 } }
  },
  "Semantic": {
    "Colour": {
      "Primary": { "$type": "color", "$value": "{Primitive.Colour.Blue-600}" },
      "On-primary": { "$type": "color", "$value": "{Primitive.Colour.White}" }
    },
    "Font family": { "Font-Brand": { "$type": "string", "$value": "Poppins" } }
  },
  "Component": {
    "Button": {
      "Background": { "$type": "color", "$value": "{Semantic.Colour.Primary}", "$description": "Filled button fill" },
      "Padding": { "$type": "number", "$value": "{Primitive.Spacing.100}" }
    }
  }
}"##;

#[test]
fn test_resolve_three_tier_chain() {
    let tree = TokenTree::from_json_str(TOKENS).unwrap();
    assert_eq!(
        resolve_at_path(&tree, "Component.Button.Background").unwrap(),
        ResolvedValue::from("#2563EB")
    );
    assert_eq!(
        resolve_at_path(&tree, "Component.Button.Padding").unwrap(),
        ResolvedValue::Number(8.0)
    );
}

#[test]
fn test_segments_with_spaces() {
    let tree = TokenTree::from_json_str(TOKENS).unwrap();
    assert_eq!(
        resolve_at_path(&tree, "Semantic.Font family.Font-Brand").unwrap(),
        ResolvedValue::from("Poppins")
    );
}

#[test]
fn test_resolve_all_in_document_order() {
    let tree = TokenTree::from_json_str(TOKENS).unwrap();
    let all = resolve_all(&tree).unwrap();
    let paths: Vec<&str> = all.keys().map(String::as_str).collect();
    assert_eq!(
        paths,
        [
            "Primitive.Colour.Blue-600",
            "Primitive.Colour.White",
            "Primitive.Spacing.100",
            "Semantic.Colour.Primary",
            "Semantic.Colour.On-primary",
            "Semantic.Font family.Font-Brand",
            "Component.Button.Background",
            "Component.Button.Padding",
        ]
    );
    assert!(all.values().all(|value| !matches!(value, ResolvedValue::Text(t) if t.starts_with('{'))));
}

#[test]
fn test_resolve_all_stops_at_first_broken_token() {
    let tree = TokenTree::from_json_str(
        r#"{ "Ok": { "$value": 1 }, "Broken": { "$value": "{Missing.Token}" } }"#,
    )
    .unwrap();
    let err = resolve_all(&tree).unwrap_err();
    assert!(matches!(err, TokenError::PathNotFound { ref segment, .. } if segment == "Missing"));
}

#[test]
fn test_cycle_error_message_lists_chain() {
    let tree = TokenTree::from_json_str(
        r#"{ "A": { "$value": "{B}" }, "B": { "$value": "{C}" }, "C": { "$value": "{A}" } }"#,
    )
    .unwrap();
    let err = resolve_at_path(&tree, "A").unwrap_err();
    assert_eq!(err.to_string(), "Cyclic token reference: A -> B -> C -> A");
}

#[test]
fn test_load_json_and_toml_files() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("Default.tokens.json");
    fs::write(&json_path, TOKENS).unwrap();
    let from_json = TokenTree::from_file(&json_path).unwrap();

    let toml_path = dir.path().join("Default.tokens.toml");
    fs::write(
        &toml_path,
        r##"
[Semantic.Colour.Primary]
"$value" = "{Primitive.Colour.Blue-600}"

[Primitive.Colour.Blue-600]
"$value" = { hex = "#2563EB" }
"##,
    )
    .unwrap();
    let from_toml = TokenTree::from_file(&toml_path).unwrap();

    assert_eq!(
        from_json.resolve_at_path("Semantic.Colour.Primary").unwrap(),
        from_toml.resolve_at_path("Semantic.Colour.Primary").unwrap()
    );
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(TokenTree::from_file(&missing), Err(TokenError::ReadError(..))));

    let yaml = dir.path().join("tokens.yaml");
    fs::write(&yaml, "a: 1").unwrap();
    assert!(matches!(TokenTree::from_file(&yaml), Err(TokenError::UnsupportedFormat(_))));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(TokenTree::from_file(&broken), Err(TokenError::ParseError(..))));
}
