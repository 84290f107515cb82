//! Tests for assembling the base theme and deriving themes from overrides

use std::collections::BTreeSet;

use cast_theme::base::default_token_tree;
use cast_theme::merge::merge;
use cast_theme::{assemble, base_theme, create_theme, Theme, ThemeError, ThemeOverrides, THEME_FIELDS};
use cast_tokens::is_alias;
use serde_json::{json, Value};

fn leaf_paths(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() { key.clone() } else { format!("{}.{}", prefix, key) };
                leaf_paths(child, &path, out);
            }
        },
        _ => {
            out.insert(prefix.to_string());
        },
    }
}

fn string_leaves(value: &Value) -> Vec<&str> {
    match value {
        Value::String(text) => vec![text.as_str()],
        Value::Object(map) => map.values().flat_map(string_leaves).collect(),
        Value::Array(items) => items.iter().flat_map(string_leaves).collect(),
        _ => Vec::new(),
    }
}

#[test]
fn test_assembly_is_total() {
    let theme = assemble(&default_token_tree().unwrap(), "default").unwrap();
    let value = theme.to_value().unwrap();

    let mut leaves = BTreeSet::new();
    leaf_paths(&value, "", &mut leaves);
    leaves.remove("name");

    let schema: BTreeSet<String> = THEME_FIELDS.iter().map(|spec| spec.field.to_string()).collect();
    assert_eq!(leaves, schema);
    assert!(string_leaves(&value).iter().all(|text| !is_alias(text)));
}

#[test]
fn test_default_theme_values() {
    let theme = base_theme().unwrap();

    assert_eq!(theme.name, "default");
    assert_eq!(theme.semantic.color.primary, "#2563EB");
    assert_eq!(theme.semantic.color.overlay, "#000000");
    assert_eq!(theme.semantic.font_family.interface, "Inter");
    assert_eq!(theme.semantic.spacing.md, 12.0);
    assert_eq!(theme.semantic.border_width.thin, 1.0);
    assert_eq!(theme.semantic.border_width.medium, 2.0);
    assert_eq!(theme.semantic.border_radius.full, 9999.0);
    assert_eq!(theme.semantic.opacity.disabled, 0.4);

    let button = &theme.component.button;
    assert_eq!(button.filled.background, theme.semantic.color.primary);
    assert_eq!(button.state.disabled_content, theme.semantic.color.on_disabled);
    assert_eq!(button.corner_radius, theme.semantic.border_radius.medium);

    let component = &theme.component;
    assert_eq!(component.card.heading_color, theme.semantic.color.on_surface);
    assert_eq!(component.card.body_color, theme.semantic.color.on_surface_muted);
    assert_eq!(component.checkbox.disabled_opacity, theme.semantic.opacity.disabled);
    assert_eq!(component.autocomplete.dropdown_elevation, theme.semantic.elevation.sm);
    assert_eq!(component.app_bar.height, theme.semantic.size.xxxl);
    assert_eq!(component.backdrop.color, theme.semantic.color.overlay);
}

#[test]
fn test_create_theme_uses_the_cached_base() {
    let first = base_theme().unwrap();
    let second = base_theme().unwrap();
    assert!(std::ptr::eq(first, second));

    let derived = create_theme(&ThemeOverrides::new(), None).unwrap();
    assert_eq!(&derived.into_theme().unwrap(), first);
}

#[test]
fn test_two_derivations_share_untouched_base_fields() {
    let base = base_theme().unwrap();

    let brand = create_theme(&ThemeOverrides::new().with("semantic.color.primary", "#FF0000"), None)
        .unwrap()
        .into_theme()
        .unwrap();
    let rounded = create_theme(&ThemeOverrides::new().with("component.button.cornerRadius", 24.0), None)
        .unwrap()
        .into_theme()
        .unwrap();

    assert!(std::ptr::eq(base, base_theme().unwrap()));

    assert_eq!(brand.semantic.color.primary, "#FF0000");
    assert_eq!(rounded.semantic.color.primary, base.semantic.color.primary);
    assert_eq!(rounded.component.button.corner_radius, 24.0);
    assert_eq!(brand.component.button.corner_radius, base.component.button.corner_radius);

    // Fields neither override touches come from the same cached base.
    assert_eq!(brand.semantic.spacing, rounded.semantic.spacing);
    assert_eq!(brand.semantic.font_size, rounded.semantic.font_size);
    assert_eq!(brand.semantic.font_family, rounded.semantic.font_family);
    assert_eq!(brand.component.card, rounded.component.card);
    assert_eq!(brand.component.card, base.component.card);
    assert_eq!(brand.semantic.color.on_primary, rounded.semantic.color.on_primary);
}

#[test]
fn test_partial_override_keeps_siblings() {
    let base = base_theme().unwrap();
    let overrides = ThemeOverrides::new()
        .with("name", "brand")
        .with("semantic.color.primary", "#FF0000");

    let theme = create_theme(&overrides, None).unwrap().into_theme().unwrap();

    assert_eq!(theme.name, "brand");
    assert_eq!(theme.semantic.color.primary, "#FF0000");
    assert_eq!(theme.semantic.color.primary_hover, base.semantic.color.primary_hover);
    assert_eq!(theme.semantic.spacing, base.semantic.spacing);
    // Derived component values are fixed at assembly time; overrides do not cascade.
    assert_eq!(theme.component.button.filled.background, base.component.button.filled.background);
}

#[test]
fn test_merge_leaves_the_base_untouched() {
    let base = base_theme().unwrap();
    let before = base.clone();

    let overrides = ThemeOverrides::from_json_str(r##"{ "semantic": { "color": { "primary": "#00FF00" } } }"##).unwrap();
    let overrides_before = overrides.clone();
    let theme = base.merged(&overrides).unwrap().into_theme().unwrap();

    assert_eq!(base, &before);
    assert_eq!(overrides, overrides_before);
    assert_ne!(&theme, base);
}

#[test]
fn test_complete_theme_as_overrides() {
    let base = base_theme().unwrap();
    let mut other = base.clone();
    other.name = "full".to_string();
    other.component.card.padding = 40.0;

    let overrides = ThemeOverrides::from_theme(&other).unwrap();
    assert_eq!(create_theme(&overrides, None).unwrap().into_theme().unwrap(), other);
}

#[test]
fn test_unknown_keys_pass_through() {
    let overrides = ThemeOverrides::from_json_str(
        r##"{
            "semantic": { "color": { "accent": "#FF00FF" } },
            "component": { "button": { "shadows": ["0 1px 2px #0003", "0 2px 4px #0002"] } },
            "mode": "dark"
        }"##,
    )
    .unwrap();

    let theme = create_theme(&overrides, None).unwrap().into_theme().unwrap();
    assert_eq!(theme.semantic.color.extra["accent"], json!("#FF00FF"));
    assert_eq!(theme.component.button.extra["shadows"], json!(["0 1px 2px #0003", "0 2px 4px #0002"]));
    assert_eq!(theme.extra["mode"], json!("dark"));

    // Arrays are replaced, not merged, on a second pass.
    let again = theme
        .merged(&ThemeOverrides::new().with("component.button.shadows", json!(["none"])))
        .unwrap()
        .into_theme()
        .unwrap();
    assert_eq!(again.component.button.extra["shadows"], json!(["none"]));
}

#[test]
fn test_null_overrides_keep_base_values() {
    let base = base_theme().unwrap();
    let overrides = ThemeOverrides::from_json_str(r#"{ "semantic": { "color": { "primary": null } } }"#).unwrap();
    let theme = create_theme(&overrides, None).unwrap().into_theme().unwrap();
    assert_eq!(theme.semantic.color.primary, base.semantic.color.primary);
}

#[test]
fn test_malformed_overrides_replace_wholesale() {
    let base = base_theme().unwrap();

    let removed_record = create_theme(&ThemeOverrides::new().with("component.card", "none"), None).unwrap();
    assert_eq!(removed_record.get_str("component.card"), Some("none"));
    assert_eq!(
        removed_record.get_number("component.button.cornerRadius"),
        Some(base.component.button.corner_radius)
    );

    let wrong_type = create_theme(&ThemeOverrides::new().with("semantic.color.primary", 5), None).unwrap();
    assert_eq!(wrong_type.get_number("semantic.color.primary"), Some(5.0));
    assert_eq!(wrong_type.get_str("semantic.color.onPrimary"), Some(base.semantic.color.on_primary.as_str()));

    // Typed access is a separate check and reports the reshaped field.
    assert!(matches!(removed_record.to_theme(), Err(ThemeError::Shape { .. })));
    assert!(matches!(wrong_type.into_theme(), Err(ThemeError::Shape { .. })));
}

#[test]
fn test_overrides_cannot_introduce_token_references() {
    let alias = ThemeOverrides::new().with("semantic.color.primary", "{Semantic.Colour.Primary}");
    match create_theme(&alias, None).unwrap_err() {
        ThemeError::UnresolvedAlias { field, value } => {
            assert_eq!(field, "semantic.color.primary");
            assert_eq!(value, "{Semantic.Colour.Primary}");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_merge_on_theme_values() {
    let base = base_theme().unwrap().to_value().unwrap();
    assert_eq!(merge(&base, &json!({})), base);

    let merged = merge(&base, &json!({ "semantic": { "spacing": { "md": 14 } } }));
    assert_eq!(merged["semantic"]["spacing"]["md"], json!(14));
    assert_eq!(merged["semantic"]["spacing"]["lg"], base["semantic"]["spacing"]["lg"]);
    assert_eq!(Theme::from_value(merged).unwrap().semantic.spacing.md, 14.0);
}
