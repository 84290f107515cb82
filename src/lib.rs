#![warn(missing_docs)]

//! Resolve design tokens and assemble themes for the Cast design system.
//!
//! This crate re-exports the token resolver ([tokens]) and the theme engine
//! ([theme]). The `cast-build` binary turns token sources into generated
//! theme files.

pub use cast_theme as theme;
pub use cast_tokens as tokens;

/// A "prelude" for users of the theme engine.
///
/// ```rust
/// use cast::prelude::*;
///
/// let theme = create_theme(&ThemeOverrides::new(), None).unwrap();
/// assert_eq!(theme.name(), Some("default"));
/// ```
pub mod prelude {
    pub use cast_theme::{
        assemble, base_theme, create_theme, install_base_theme, BuildConfig, DerivedTheme, Theme,
        ThemeError, ThemeOverrides, ThemeRegistry, ThemeResult,
    };
    pub use cast_tokens::{resolve_at_path, ResolvedValue, TokenError, TokenTree};
}
