//! Alias resolution over a [TokenTree].
//!
//! A token's `$value` may name another token with the `{Path.To.Token}`
//! syntax. The [Resolver] follows such chains to a concrete number or string,
//! collapsing color objects to their `hex` field along the way.
//!
//! ## Cycle detection
//!
//! The resolver keeps the set of token paths currently being resolved. A
//! chain that re-enters one of them fails with
//! [TokenError::CyclicReference] instead of recursing, so every lookup
//! terminates after at most one hop per distinct token in the tree.
//!
//! ```rust
//! use cast_tokens::{resolve_at_path, ResolvedValue, TokenTree};
//!
//! let tree = TokenTree::from_json_str(r##"{
//!     "Primitive": { "Blue": { "$value": { "hex": "#2563EB" } } },
//!     "Semantic": { "Primary": { "$value": "{Primitive.Blue}" } }
//! }"##).unwrap();
//!
//! let primary = resolve_at_path(&tree, "Semantic.Primary").unwrap();
//! assert_eq!(primary, ResolvedValue::Text("#2563EB".to_string()));
//! ```

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use crate::error::{TokenError, TokenResult};
use crate::path::TokenPath;
use crate::tree::TokenTree;
use crate::value::{RawValue, ResolvedValue};

/// Resolves token values against one tree, tracking the alias chain in
/// progress.
pub struct Resolver<'a> {
    tree: &'a TokenTree,
    in_progress: IndexSet<String>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver for the given tree.
    pub fn new(tree: &'a TokenTree) -> Self {
        Self {
            tree,
            in_progress: IndexSet::new(),
        }
    }

    /// Resolve a declared value: concrete values are returned unchanged,
    /// color objects collapse to their hex string, aliases are followed.
    pub fn resolve(&mut self, value: &Value) -> TokenResult<ResolvedValue> {
        match RawValue::classify("", value)? {
            RawValue::Concrete(resolved) => Ok(resolved),
            RawValue::Alias(target) => {
                let reference = target.to_alias();
                log::trace!("Following <inline> -> {}", reference);
                self.follow(target, reference)
            },
        }
    }

    /// Look up the token at a dot path and resolve its `$value`.
    pub fn resolve_at_path(&mut self, path: &str) -> TokenResult<ResolvedValue> {
        self.follow(TokenPath::parse(path), path.to_string())
    }

    /// Follow an alias chain starting at `path`. The chain is walked
    /// iteratively, one hop per token, so its length is bounded only by the
    /// number of distinct tokens in the tree.
    fn follow(&mut self, path: TokenPath, reference: String) -> TokenResult<ResolvedValue> {
        let depth = self.in_progress.len();
        let resolved = self.walk(path, reference);
        self.in_progress.truncate(depth);
        resolved
    }

    fn walk(&mut self, mut path: TokenPath, mut reference: String) -> TokenResult<ResolvedValue> {
        loop {
            let key = path.to_string();
            if self.in_progress.contains(&key) {
                let mut chain: Vec<String> = self.in_progress.iter().cloned().collect();
                chain.push(key);
                return Err(TokenError::CyclicReference { chain });
            }

            let declared = self.tree.declared_value(&path, &reference)?;
            let raw = RawValue::classify(&key, declared)?;

            match raw {
                RawValue::Concrete(resolved) => return Ok(resolved),
                RawValue::Alias(target) => {
                    reference = target.to_alias();
                    log::trace!("Following {} -> {}", key, reference);
                    self.in_progress.insert(key);
                    path = target;
                },
            }
        }
    }
}

impl TokenTree {
    /// Resolve the token at `path`. See [resolve_at_path].
    pub fn resolve_at_path(&self, path: &str) -> TokenResult<ResolvedValue> {
        resolve_at_path(self, path)
    }

    /// Resolve a declared value against this tree. See [resolve].
    pub fn resolve(&self, value: &Value) -> TokenResult<ResolvedValue> {
        resolve(self, value)
    }
}

/// Resolve a declared value (concrete, color object, or alias string)
/// against `tree`.
pub fn resolve(tree: &TokenTree, value: &Value) -> TokenResult<ResolvedValue> {
    Resolver::new(tree).resolve(value)
}

/// Look up the token at the dot path `path` and resolve it fully.
///
/// # Errors
///
/// - [TokenError::PathNotFound] if a segment of `path`, or of any alias on
///   the way, does not exist.
/// - [TokenError::NoValueAtPath] if an addressed node has no `$value`.
/// - [TokenError::CyclicReference] if the alias chain loops.
/// - [TokenError::UnsupportedValueShape] if a declared value has a shape the
///   resolver does not understand.
pub fn resolve_at_path(tree: &TokenTree, path: &str) -> TokenResult<ResolvedValue> {
    Resolver::new(tree).resolve_at_path(path)
}

/// Resolve every token in the tree, keyed by dot path in document order.
///
/// Fails on the first token that does not resolve.
pub fn resolve_all(tree: &TokenTree) -> TokenResult<IndexMap<String, ResolvedValue>> {
    let mut resolved = IndexMap::new();
    for path in tree.token_paths() {
        let value = resolve_at_path(tree, &path)?;
        resolved.insert(path, value);
    }
    log::debug!("Resolved {} tokens", resolved.len());
    Ok(resolved)
}
