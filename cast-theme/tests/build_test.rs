//! Tests for the token build: config, generated files and loading them back

use std::fs;

use cast_theme::base::{default_token_tree, DEFAULT_TOKENS};
use cast_theme::emit::{self, Manifest, MANIFEST_FILE};
use cast_theme::{assemble, BuildConfig, Theme, ThemeError};
use cast_tokens::TokenError;

fn workspace() -> (tempfile::TempDir, BuildConfig) {
    let dir = tempfile::tempdir().unwrap();
    let tokens_dir = dir.path().join("design-tokens");
    fs::create_dir_all(&tokens_dir).unwrap();
    fs::write(tokens_dir.join("Default.tokens.json"), DEFAULT_TOKENS).unwrap();

    let config = BuildConfig::new()
        .with_tokens_dir(tokens_dir)
        .with_out_dir(dir.path().join("generated"));
    (dir, config)
}

#[test]
fn test_build_writes_theme_reference_and_manifest() {
    let (_dir, config) = workspace();

    let manifest = emit::build(&config).unwrap();

    assert_eq!(manifest.themes.len(), 1);
    let entry = &manifest.themes[0];
    assert_eq!(entry.name, "default");
    assert_eq!(entry.source, "Default.tokens.json");

    let out = &config.out_dir;
    let theme_file = fs::read_to_string(out.join("default.theme.toml")).unwrap();
    assert!(theme_file.starts_with("# Auto-generated by cast-build - DO NOT EDIT"));

    let reference = fs::read_to_string(out.join("default.reference.json")).unwrap();
    assert!(reference.ends_with('\n'));

    assert_eq!(Manifest::from_file(out.join(MANIFEST_FILE)).unwrap(), manifest);
}

#[test]
fn test_generated_files_load_back_to_the_assembled_theme() {
    let (_dir, config) = workspace();
    emit::build(&config).unwrap();

    let expected = assemble(&default_token_tree().unwrap(), "default").unwrap();
    let out = &config.out_dir;

    assert_eq!(Theme::from_file(out.join("default.theme.toml")).unwrap(), expected);
    assert_eq!(Theme::from_file(out.join("default.reference.json")).unwrap(), expected);

    let registry = emit::load_generated(out).unwrap();
    assert_eq!(registry.available_themes(), vec!["default"]);
    assert_eq!(*registry.get("default").unwrap(), expected);
}

#[test]
fn test_several_themes_from_json_and_toml_sources() {
    let (_dir, config) = workspace();
    fs::write(
        config.tokens_dir.join("Compact.tokens.toml"),
        toml::to_string(&default_token_tree().unwrap().root()).unwrap(),
    )
    .unwrap();
    let config = config.with_theme("Compact.tokens.toml", "compact");

    let manifest = emit::build(&config).unwrap();
    let names: Vec<&str> = manifest.themes.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["default", "compact"]);

    let registry = emit::load_generated(&config.out_dir).unwrap();
    let default = registry.get("default").unwrap();
    let compact = registry.get("compact").unwrap();
    assert_eq!(compact.semantic, default.semantic);
    assert_eq!(compact.component, default.component);
}

#[test]
fn test_broken_tokens_write_nothing() {
    let (_dir, config) = workspace();
    fs::write(
        config.tokens_dir.join("Broken.tokens.json"),
        r#"{ "Semantic": { "Colour": { "Primary": { "$value": "{Primitive.Colour.Nope}" } } } }"#,
    )
    .unwrap();
    let config = config.with_theme("Broken.tokens.json", "broken");

    let err = emit::build(&config).unwrap_err();
    assert!(matches!(err, ThemeError::Token(TokenError::PathNotFound { .. })));
    assert!(!config.out_dir.exists());
}

#[test]
fn test_check_reports_missing_sources() {
    let (_dir, config) = workspace();
    let config = config.with_theme("Missing.tokens.json", "missing");
    assert!(matches!(
        emit::check(&config),
        Err(ThemeError::Token(TokenError::ReadError(..)))
    ));
}

#[test]
fn test_config_file_drives_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let tokens_dir = dir.path().join("tokens");
    fs::create_dir_all(&tokens_dir).unwrap();
    fs::write(tokens_dir.join("Brand.tokens.json"), DEFAULT_TOKENS).unwrap();

    let config_path = dir.path().join("cast.toml");
    fs::write(
        &config_path,
        format!(
            "tokens_dir = {:?}\nout_dir = {:?}\n\n[[theme]]\nfile = \"Brand.tokens.json\"\nname = \"brand\"\n",
            tokens_dir.to_string_lossy(),
            dir.path().join("out").to_string_lossy(),
        ),
    )
    .unwrap();

    let config = BuildConfig::from_file(&config_path).unwrap();
    let manifest = emit::build(&config).unwrap();

    assert_eq!(manifest.themes[0].name, "brand");
    assert!(dir.path().join("out").join("brand.theme.toml").exists());
}
