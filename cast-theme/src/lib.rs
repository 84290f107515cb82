#![warn(missing_docs)]

//! # Cast Theming System
//!
//! Assembles fully resolved, strongly shaped themes from design-token trees
//! and derives custom themes from partial overrides.
//!
//! ## Overview
//!
//! - **[Theme](schema::Theme)**: the typed two-tier theme (semantic and component tokens)
//! - **[THEME_FIELDS](fields::THEME_FIELDS)**: where every theme field comes from
//! - **[Assembler](assembler::Assembler)**: resolves the field table against a token tree
//! - **[merge](merge::merge)**: deep merge of override trees
//! - **[create_theme]**: derive a theme from the cached base theme or an explicit one
//! - **[DerivedTheme](derived::DerivedTheme)**: the merged document, checked into a typed theme on request
//! - **[ThemeRegistry](registry::ThemeRegistry)**: themes by name
//! - **[BuildConfig](config::BuildConfig)**: token build settings from files and environment
//! - **[emit]**: writes generated theme sources, reference copies and a manifest
//!
//! ## Quick Start
//!
//! ```rust
//! use cast_theme::{base_theme, create_theme, ThemeOverrides};
//!
//! // The base theme is assembled from the embedded default tokens on first use.
//! let base = base_theme().unwrap();
//! assert_eq!(base.semantic.color.primary, "#2563EB");
//!
//! // Derive a branded theme; untouched fields keep their base values.
//! let overrides = ThemeOverrides::from_json_str(r##"{
//!     "name": "my-brand",
//!     "semantic": { "color": { "primary": "#FF0000" } }
//! }"##).unwrap();
//!
//! let theme = create_theme(&overrides, None).unwrap().into_theme().unwrap();
//! assert_eq!(theme.semantic.color.primary, "#FF0000");
//! assert_eq!(theme.semantic.color.on_primary, base.semantic.color.on_primary);
//! ```
//!
//! ## Assembling From Tokens
//!
//! ```rust
//! use cast_theme::assemble;
//! use cast_theme::base::default_token_tree;
//!
//! let tree = default_token_tree().unwrap();
//! let theme = assemble(&tree, "default").unwrap();
//!
//! // Component tokens without a source entry are derived from semantic ones.
//! assert_eq!(theme.component.switch.track_on_background, theme.semantic.color.primary);
//! ```
//!
//! ## Guarantees
//!
//! - Neither a [Theme](schema::Theme) nor a [DerivedTheme](derived::DerivedTheme)
//!   contains an unresolved `{…}` token reference. Every constructor
//!   (assembly, merge, loading) checks this.
//! - Assembly is all or nothing: the first unresolvable token, type mismatch
//!   or missing dependency fails it.
//! - Merging never mutates its inputs and never fails on the shape of an
//!   override; checking a derived theme against the schema is a separate,
//!   explicit step ([DerivedTheme::to_theme](derived::DerivedTheme::to_theme)).

/// Theme assembly from token trees.
pub mod assembler;
/// The base theme cache and theme creation.
pub mod base;
/// Build configuration.
pub mod config;
/// Themes derived by overrides.
pub mod derived;
/// Generated build output.
pub mod emit;
/// Error types for the theme engine.
pub mod error;
/// The schema field table.
pub mod fields;
/// Deep merge of overrides.
pub mod merge;
/// Partial theme overrides.
pub mod overrides;
/// Registry of named themes.
pub mod registry;
/// Typed theme records.
pub mod schema;

pub use assembler::{assemble, Assembler};
pub use base::{base_theme, create_theme, install_base_theme, DEFAULT_THEME_NAME};
pub use config::{BuildConfig, ThemeSourceConfig};
pub use derived::DerivedTheme;
pub use error::{ThemeError, ThemeResult};
pub use fields::{Derivation, FieldSource, FieldSpec, ValueKind, THEME_FIELDS};
pub use overrides::ThemeOverrides;
pub use registry::ThemeRegistry;
pub use schema::{ComponentTokens, SemanticTokens, Theme};
