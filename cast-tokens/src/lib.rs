#![warn(missing_docs)]

//! # Cast Design Tokens
//!
//! Loading and alias resolution for design-token trees.
//!
//! A token tree is a nested mapping whose leaves are token nodes. Each node
//! declares one value under `$value`: a number, a string, a color object with
//! a `hex` field, or an alias such as `{Semantic.Colour.Primary}` that names
//! another token by its dot path.
//!
//! ## Overview
//!
//! - **[TokenTree]**: the read-only tree, loaded from JSON or TOML
//! - **[TokenPath]**: a dot path, and the `{…}` alias syntax around it
//! - **[Resolver]**: follows alias chains to a [ResolvedValue], detecting cycles
//! - **[TokenError]**: everything that can go wrong while loading or resolving
//!
//! ## Quick Start
//!
//! ```rust
//! use cast_tokens::{TokenTree, ResolvedValue};
//!
//! let tree = TokenTree::from_json_str(r##"{
//!     "Primitive": { "Spacing": { "200": { "$value": 16 } } },
//!     "Semantic": { "Spacing": { "Md": { "$value": "{Primitive.Spacing.200}" } } }
//! }"##).unwrap();
//!
//! assert_eq!(
//!     tree.resolve_at_path("Semantic.Spacing.Md").unwrap(),
//!     ResolvedValue::Number(16.0)
//! );
//! ```
//!
//! ## Errors
//!
//! Resolution never falls back to a default. A missing segment, a node
//! without `$value`, an alias cycle, or a value of an unknown shape all fail
//! the lookup with a [TokenError] describing where it went wrong.

/// Error types for token loading and resolution.
pub mod error;
/// Dot paths and alias syntax.
pub mod path;
/// Alias resolution.
pub mod resolver;
/// Token trees and loaders.
pub mod tree;
/// Declared and resolved values.
pub mod value;

pub use error::{TokenError, TokenResult};
pub use path::{alias_target, is_alias, TokenPath};
pub use resolver::{resolve, resolve_all, resolve_at_path, Resolver};
pub use tree::TokenTree;
pub use value::{as_whole, number_to_json, RawValue, ResolvedValue, HEX_KEY, VALUE_KEY};
