//! # Build Output
//!
//! Assembles the configured token sources and writes, per theme:
//!
//! - `<name>.theme.toml`: the resolved theme as a loadable source, read back
//!   with [Theme::from_file]
//! - `<name>.reference.json`: the resolved theme as plain JSON, a starting
//!   point for override documents
//!
//! plus an `index.toml` manifest listing every generated theme.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use cast_tokens::TokenTree;

use crate::assembler::assemble;
use crate::config::{BuildConfig, ThemeSourceConfig};
use crate::error::{ThemeError, ThemeResult};
use crate::registry::ThemeRegistry;
use crate::schema::Theme;

/// File name suffix of generated theme sources.
pub const THEME_FILE_SUFFIX: &str = ".theme.toml";
/// File name suffix of generated reference copies.
pub const REFERENCE_FILE_SUFFIX: &str = ".reference.json";
/// File name of the manifest.
pub const MANIFEST_FILE: &str = "index.toml";

const GENERATED_HEADER: &str = "# Auto-generated by cast-build - DO NOT EDIT";

/// One generated theme, as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Theme name.
    pub name: String,
    /// Token source file the theme was built from.
    pub source: String,
    /// Generated theme source, relative to the output directory.
    pub theme: String,
    /// Generated reference copy, relative to the output directory.
    pub reference: String,
}

impl ManifestEntry {
    fn for_theme(source: &ThemeSourceConfig) -> Self {
        Self {
            name: source.name.clone(),
            source: source.file.clone(),
            theme: format!("{}{}", source.name, THEME_FILE_SUFFIX),
            reference: format!("{}{}", source.name, REFERENCE_FILE_SUFFIX),
        }
    }
}

/// The `index.toml` manifest of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Generated themes, in build order.
    #[serde(default, rename = "theme")]
    pub themes: Vec<ManifestEntry>,
}

impl Manifest {
    /// Read a manifest file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ThemeError::read_error(path, e))?;
        toml::from_str(&content).map_err(|e| ThemeError::parse_error(path, e.to_string()))
    }

    /// Render the manifest, including the generated-file header.
    pub fn to_toml_string(&self) -> ThemeResult<String> {
        let body = toml::to_string_pretty(self).map_err(|e| ThemeError::Serialization(e.to_string()))?;
        Ok(format!("{}\n\n{}", GENERATED_HEADER, body))
    }
}

/// Render a theme as a loadable TOML source.
pub fn theme_source(theme: &Theme, source_file: &str) -> ThemeResult<String> {
    let body = toml::to_string_pretty(&theme.to_value()?).map_err(|e| ThemeError::Serialization(e.to_string()))?;
    Ok(format!("{}\n# Source: {}\n\n{}", GENERATED_HEADER, source_file, body))
}

/// Render a theme as pretty-printed JSON with a trailing newline.
pub fn reference_json(theme: &Theme) -> ThemeResult<String> {
    let mut json = serde_json::to_string_pretty(&theme.to_value()?).map_err(|e| ThemeError::Serialization(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

/// Load and assemble one configured theme.
pub fn build_theme(config: &BuildConfig, source: &ThemeSourceConfig) -> ThemeResult<Theme> {
    let path = config.token_file(source);
    let tree = TokenTree::from_file(&path)?;
    assemble(&tree, &source.name)
}

/// Assemble every configured theme without writing anything.
pub fn check(config: &BuildConfig) -> ThemeResult<Vec<Theme>> {
    config
        .themes
        .iter()
        .map(|source| build_theme(config, source))
        .collect()
}

/// Assemble every configured theme and write the generated files.
///
/// All themes are assembled before the first file is written, so a broken
/// token source leaves the output directory untouched.
pub fn build(config: &BuildConfig) -> ThemeResult<Manifest> {
    let themes = check(config)?;

    let out_dir = &config.out_dir;
    fs::create_dir_all(out_dir).map_err(|e| ThemeError::write_error(out_dir, e))?;

    let mut manifest = Manifest::default();
    for (source, theme) in config.themes.iter().zip(&themes) {
        let entry = ManifestEntry::for_theme(source);

        write_file(&out_dir.join(&entry.theme), &theme_source(theme, &source.file)?)?;
        write_file(&out_dir.join(&entry.reference), &reference_json(theme)?)?;
        log::info!("Built theme '{}' from {}", entry.name, source.file);

        manifest.themes.push(entry);
    }

    write_file(&out_dir.join(MANIFEST_FILE), &manifest.to_toml_string()?)?;
    Ok(manifest)
}

/// Load every theme listed in the manifest of `out_dir` into a registry.
pub fn load_generated<P: AsRef<Path>>(out_dir: P) -> ThemeResult<ThemeRegistry> {
    let out_dir = out_dir.as_ref();
    let manifest = Manifest::from_file(out_dir.join(MANIFEST_FILE))?;

    let mut registry = ThemeRegistry::new();
    for entry in &manifest.themes {
        registry.register(Theme::from_file(out_dir.join(&entry.theme))?);
    }
    Ok(registry)
}

fn write_file(path: &Path, content: &str) -> ThemeResult<()> {
    fs::write(path, content).map_err(|e| ThemeError::write_error(path, e))?;
    log::info!("Wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::base_theme;

    #[test]
    fn theme_source_starts_with_the_header() {
        let source = theme_source(base_theme().unwrap(), "Default.tokens.json").unwrap();
        assert!(source.starts_with(GENERATED_HEADER));
        assert!(source.contains("# Source: Default.tokens.json"));
        assert!(source.contains("surface = \"#FFFFFF\""));
    }

    #[test]
    fn theme_source_loads_back() {
        let theme = base_theme().unwrap();
        let source = theme_source(theme, "Default.tokens.json").unwrap();
        assert_eq!(&Theme::from_toml_str(&source).unwrap(), theme);
    }

    #[test]
    fn reference_json_ends_with_newline() {
        let json = reference_json(base_theme().unwrap()).unwrap();
        assert!(json.ends_with("}\n"));
        assert!(json.contains("\"onSurfaceMuted\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["semantic"]["spacing"]["md"], serde_json::json!(12));
        assert_eq!(value["semantic"]["opacity"]["disabled"], serde_json::json!(0.4));
    }

    #[test]
    fn theme_source_writes_whole_numbers_as_integers() {
        let source = theme_source(base_theme().unwrap(), "Default.tokens.json").unwrap();
        assert!(source.contains("md = 12\n"));
        assert!(!source.contains("md = 12.0"));
    }

    #[test]
    fn manifest_lists_generated_names() {
        let entry = ManifestEntry::for_theme(&ThemeSourceConfig::new("Dark.tokens.json", "dark"));
        assert_eq!(entry.theme, "dark.theme.toml");
        assert_eq!(entry.reference, "dark.reference.json");

        let manifest = Manifest { themes: vec![entry] };
        let rendered = manifest.to_toml_string().unwrap();
        assert!(rendered.contains("[[theme]]"));
        assert_eq!(toml::from_str::<Manifest>(&rendered).unwrap(), manifest);
    }
}
