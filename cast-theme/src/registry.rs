//! # Theme Registry
//!
//! A by-name registry of assembled themes.
//!
//! Themes are shared as `Arc<Theme>`; a registry hands out cheap clones and
//! never mutates a theme after it has been registered. New themes are either
//! registered directly (assembled from a token source or loaded from a
//! generated file) or derived from a registered theme with
//! [ThemeRegistry::derive].
//!
//! ```rust
//! use cast_theme::{ThemeOverrides, ThemeRegistry};
//!
//! let mut registry = ThemeRegistry::with_base().unwrap();
//! registry
//!     .derive("default", "brand", &ThemeOverrides::new().with("semantic.color.primary", "#FF0000"))
//!     .unwrap();
//!
//! assert_eq!(registry.available_themes(), vec!["brand", "default"]);
//! assert_eq!(registry.get("brand").unwrap().semantic.color.primary, "#FF0000");
//! ```

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::{base_theme, create_theme};
use crate::error::{ThemeError, ThemeResult};
use crate::overrides::ThemeOverrides;
use crate::schema::Theme;

/// Registry of available themes, keyed by theme name.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Arc<Theme>>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the process-wide base theme.
    pub fn with_base() -> ThemeResult<Self> {
        let mut registry = Self::new();
        registry.register(base_theme()?.clone());
        Ok(registry)
    }

    /// Register a theme under its own name, replacing any theme of the same
    /// name.
    pub fn register(&mut self, theme: Theme) -> Arc<Theme> {
        let theme = Arc::new(theme);
        if self.themes.insert(theme.name.clone(), theme.clone()).is_some() {
            log::debug!("Replaced registered theme '{}'", theme.name);
        }
        theme
    }

    /// Get a registered theme by name.
    pub fn get(&self, name: &str) -> ThemeResult<Arc<Theme>> {
        self.themes
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::not_found(name))
    }

    /// Check if a theme is registered.
    pub fn is_theme_available(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Names of all registered themes, sorted.
    pub fn available_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Derive the theme `name` from the registered theme `base` and register
    /// it.
    ///
    /// The `name` argument wins over any name given in `overrides`. Only
    /// themes that match the schema are registered, so an override that
    /// reshapes a schema field fails here with [ThemeError::Shape].
    pub fn derive(&mut self, base: &str, name: &str, overrides: &ThemeOverrides) -> ThemeResult<Arc<Theme>> {
        let base = self.get(base)?;
        let overrides = overrides.clone().with("name", name);
        let theme = create_theme(&overrides, Some(&base))?.into_theme()?;
        log::debug!("Derived theme '{}' from '{}'", name, base.name);
        Ok(self.register(theme))
    }

    /// Remove a theme from the registry.
    pub fn remove(&mut self, name: &str) -> Option<Arc<Theme>> {
        self.themes.shift_remove(name)
    }

    /// Iterate over registered themes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Theme>> {
        self.themes.values()
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether no theme is registered.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_themes_are_reported_by_name() {
        let registry = ThemeRegistry::new();
        assert!(matches!(
            registry.get("missing"),
            Err(ThemeError::ThemeNotFound { ref name }) if name == "missing"
        ));
    }

    #[test]
    fn derived_themes_keep_the_base_registered() {
        let mut registry = ThemeRegistry::with_base().unwrap();
        let overrides = ThemeOverrides::new()
            .with("name", "ignored")
            .with("component.button.cornerRadius", 999.0);

        let derived = registry.derive("default", "rounded", &overrides).unwrap();

        assert_eq!(derived.name, "rounded");
        assert_eq!(derived.component.button.corner_radius, 999.0);
        assert_eq!(registry.len(), 2);
        assert_ne!(registry.get("default").unwrap().component.button.corner_radius, 999.0);
    }

    #[test]
    fn reshaped_derivations_are_not_registered() {
        let mut registry = ThemeRegistry::with_base().unwrap();
        let overrides = ThemeOverrides::new().with("component.card", "none");

        assert!(matches!(
            registry.derive("default", "broken", &overrides),
            Err(ThemeError::Shape { .. })
        ));
        assert!(!registry.is_theme_available("broken"));
    }

    #[test]
    fn registering_a_name_twice_replaces_the_theme() {
        let mut registry = ThemeRegistry::with_base().unwrap();
        let mut replacement = (*registry.get("default").unwrap()).clone();
        replacement.semantic.color.primary = "#000000".to_string();

        registry.register(replacement);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("default").unwrap().semantic.color.primary, "#000000");
        assert!(registry.remove("default").is_some());
        assert!(registry.is_empty());
    }
}
