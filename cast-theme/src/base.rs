//! The canonical base theme and [create_theme].
//!
//! The base theme is assembled from the token source embedded in this crate
//! the first time it is needed and then shared for the rest of the process.
//! Concurrent first callers block until one of them has finished assembling;
//! all of them observe the same instance.

use once_cell::sync::OnceCell;

use cast_tokens::TokenTree;

use crate::assembler::assemble;
use crate::derived::DerivedTheme;
use crate::error::{ThemeError, ThemeResult};
use crate::overrides::ThemeOverrides;
use crate::schema::Theme;

/// Name of the canonical base theme.
pub const DEFAULT_THEME_NAME: &str = "default";

/// The token source the base theme is assembled from.
pub const DEFAULT_TOKENS: &str = include_str!("../tokens/Default.tokens.json");

static BASE_THEME: OnceCell<Theme> = OnceCell::new();

/// Parse the embedded default token source.
pub fn default_token_tree() -> ThemeResult<TokenTree> {
    Ok(TokenTree::from_json_str(DEFAULT_TOKENS)?)
}

/// The process-wide base theme, assembled on first use.
///
/// A failed assembly is returned to the caller and leaves the cache empty,
/// so a later call tries again.
pub fn base_theme() -> ThemeResult<&'static Theme> {
    BASE_THEME.get_or_try_init(|| {
        log::debug!("Assembling base theme '{}'", DEFAULT_THEME_NAME);
        let tree = default_token_tree()?;
        assemble(&tree, DEFAULT_THEME_NAME)
    })
}

/// Install `theme` as the process-wide base theme.
///
/// Must be called before anything reads the base theme; fails with
/// [ThemeError::BaseThemeAlreadyInitialized] otherwise.
pub fn install_base_theme(theme: Theme) -> ThemeResult<()> {
    let name = theme.name.clone();
    BASE_THEME
        .set(theme)
        .map_err(|_| ThemeError::BaseThemeAlreadyInitialized)?;
    log::debug!("Installed base theme '{}'", name);
    Ok(())
}

/// Create a theme by merging `overrides` onto `base`, or onto the
/// process-wide [base_theme] when no base is given.
///
/// Any override shape is accepted: objects merge key by key and everything
/// else replaces the base value. The only failures are an unresolved `{…}`
/// reference in the overrides and a base theme that cannot be assembled.
///
/// ```rust
/// use cast_theme::{create_theme, ThemeOverrides};
///
/// let overrides = ThemeOverrides::new()
///     .with("name", "my-brand")
///     .with("semantic.color.primary", "#FF0000");
///
/// let derived = create_theme(&overrides, None).unwrap();
/// assert_eq!(derived.name(), Some("my-brand"));
///
/// let theme = derived.into_theme().unwrap();
/// assert_eq!(theme.semantic.color.primary, "#FF0000");
/// ```
pub fn create_theme(overrides: &ThemeOverrides, base: Option<&Theme>) -> ThemeResult<DerivedTheme> {
    let base = match base {
        Some(base) => base,
        None => base_theme()?,
    };
    base.merged(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_theme_is_built_once() {
        let first = base_theme().unwrap();
        let second = base_theme().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.name, DEFAULT_THEME_NAME);
    }

    #[test]
    fn install_after_first_use_is_refused() {
        let theme = base_theme().unwrap().clone();
        assert!(matches!(
            install_base_theme(theme),
            Err(ThemeError::BaseThemeAlreadyInitialized)
        ));
    }

    #[test]
    fn explicit_base_is_used_instead_of_the_cache() {
        let mut custom = base_theme().unwrap().clone();
        custom.name = "custom".to_string();
        custom.semantic.color.primary = "#123456".to_string();

        let derived = create_theme(&ThemeOverrides::new(), Some(&custom)).unwrap();
        assert_eq!(derived.into_theme().unwrap(), custom);
    }
}
