//! # Build Configuration
//!
//! Settings for the token build: where token sources live, where generated
//! files go, and which themes to build.
//!
//! ## Sources
//!
//! - **Defaults**: `design-tokens/Default.tokens.json` built as `default`
//!   into `generated/`
//! - **Configuration file**: a TOML file, see below
//! - **Environment variables**: override individual settings
//! - **Programmatic**: builder methods on [BuildConfig]
//!
//! ## Environment Variables
//!
//! - `CAST_BUILD_CONFIG`: path to a TOML configuration file
//! - `CAST_TOKENS_DIR`: directory holding token source files
//! - `CAST_OUT_DIR`: directory generated files are written to
//!
//! ## Configuration File Format
//!
//! ```toml
//! tokens_dir = "design-tokens"
//! out_dir = "generated"
//!
//! [[theme]]
//! file = "Default.tokens.json"
//! name = "default"
//!
//! [[theme]]
//! file = "Dark.tokens.json"
//! name = "dark"
//! ```

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::base::DEFAULT_THEME_NAME;
use crate::error::{ThemeError, ThemeResult};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "CAST_BUILD_CONFIG";
/// Environment variable overriding [BuildConfig::tokens_dir].
pub const TOKENS_DIR_ENV: &str = "CAST_TOKENS_DIR";
/// Environment variable overriding [BuildConfig::out_dir].
pub const OUT_DIR_ENV: &str = "CAST_OUT_DIR";

/// One theme to build: a token source file and the theme name it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSourceConfig {
    /// File name of the token source, relative to the tokens directory.
    pub file: String,
    /// Name of the generated theme.
    pub name: String,
}

impl ThemeSourceConfig {
    /// Create a theme source entry.
    pub fn new(file: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            name: name.into(),
        }
    }
}

/// Configuration of a token build.
///
/// # Examples
///
/// ```rust
/// use cast_theme::config::BuildConfig;
///
/// let config = BuildConfig::new()
///     .with_tokens_dir("tokens")
///     .with_out_dir("target/themes");
///
/// assert_eq!(config.themes.len(), 1);
/// assert_eq!(config.token_file(&config.themes[0]), std::path::Path::new("tokens/Default.tokens.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory holding the token source files.
    pub tokens_dir: PathBuf,
    /// Directory generated files are written to.
    pub out_dir: PathBuf,
    /// Themes to build, in order.
    #[serde(rename = "theme")]
    pub themes: Vec<ThemeSourceConfig>,
}

impl BuildConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self {
            tokens_dir: PathBuf::from("design-tokens"),
            out_dir: PathBuf::from("generated"),
            themes: vec![ThemeSourceConfig::new("Default.tokens.json", DEFAULT_THEME_NAME)],
        }
    }

    /// Create a configuration from environment variables, or use defaults.
    ///
    /// A configuration file named by `CAST_BUILD_CONFIG` is loaded first; if
    /// it cannot be loaded a warning is logged and the defaults are used.
    /// `CAST_TOKENS_DIR` and `CAST_OUT_DIR` then override the directories.
    pub fn from_env_or_default() -> Self {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring build config from {}: {}", CONFIG_ENV, e);
                Self::new()
            }),
            Err(_) => Self::new(),
        };

        if let Ok(dir) = env::var(TOKENS_DIR_ENV) {
            config.tokens_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var(OUT_DIR_ENV) {
            config.out_dir = PathBuf::from(dir);
        }

        config
    }

    /// Load a configuration from a TOML file.
    ///
    /// Relative directories in the file are kept as written; they resolve
    /// against the working directory of the build.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::unsupported_format(path));
        }
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::read_error(path, e))?;
        log::info!("Loading build config from {:?}", path);
        toml::from_str(&content).map_err(|e| ThemeError::parse_error(path, e.to_string()))
    }

    /// Load a configuration from TOML content. Missing keys keep their
    /// defaults.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        toml::from_str(content).map_err(|e| ThemeError::parse_error("<toml>", e.to_string()))
    }

    /// Set the token source directory.
    pub fn with_tokens_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tokens_dir = dir.into();
        self
    }

    /// Set the output directory.
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Add a theme to build, replacing any configured theme of the same name.
    pub fn with_theme(mut self, file: impl Into<String>, name: impl Into<String>) -> Self {
        let theme = ThemeSourceConfig::new(file, name);
        self.themes.retain(|existing| existing.name != theme.name);
        self.themes.push(theme);
        self
    }

    /// Restrict the build to the theme called `name`.
    pub fn only_theme(mut self, name: &str) -> ThemeResult<Self> {
        self.themes.retain(|theme| theme.name == name);
        if self.themes.is_empty() {
            return Err(ThemeError::not_found(name));
        }
        Ok(self)
    }

    /// Full path of a theme's token source.
    pub fn token_file(&self, theme: &ThemeSourceConfig) -> PathBuf {
        self.tokens_dir.join(&theme.file)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}
