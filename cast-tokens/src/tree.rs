//! Token trees and the loaders that read them.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{TokenError, TokenResult};
use crate::path::TokenPath;
use crate::value::VALUE_KEY;

/// A read-only tree of design tokens.
///
/// Interior nodes are mappings; leaves are token nodes declaring a `$value`.
/// The tree is never mutated after it has been loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTree {
    root: Map<String, Value>,
}

impl TokenTree {
    /// Wrap an already parsed document. The root must be an object.
    pub fn from_value(value: Value) -> TokenResult<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(TokenError::InvalidRoot(other.to_string())),
        }
    }

    /// Parse a token tree from JSON content.
    pub fn from_json_str(content: &str) -> TokenResult<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| TokenError::ParseError("<json>".into(), e.to_string()))?;
        Self::from_value(value)
    }

    /// Parse a token tree from TOML content with the same shape as the JSON
    /// format (quoted keys for segments containing spaces or `$`).
    pub fn from_toml_str(content: &str) -> TokenResult<Self> {
        let value: Value = toml::from_str(content)
            .map_err(|e| TokenError::ParseError("<toml>".into(), e.to_string()))?;
        Self::from_value(value)
    }

    /// Load a token tree from a `.json` or `.toml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> TokenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TokenError::ReadError(path.to_path_buf(), e))?;

        log::debug!("Loaded token source {:?} ({} bytes)", path, content.len());

        let parsed = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str::<Value>(&content).map_err(|e| e.to_string()),
            Some("toml") => toml::from_str::<Value>(&content).map_err(|e| e.to_string()),
            _ => return Err(TokenError::UnsupportedFormat(path.to_path_buf())),
        };

        let value = parsed.map_err(|details| TokenError::ParseError(path.to_path_buf(), details))?;
        Self::from_value(value)
    }

    /// The root mapping of the tree.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Walk the tree segment by segment and return the addressed node.
    ///
    /// `reference` is the text reported in errors; it is the alias string as
    /// written when the walk starts from an alias.
    pub fn lookup(&self, path: &TokenPath, reference: &str) -> TokenResult<&Value> {
        let mut cursor: Option<&Map<String, Value>> = Some(&self.root);
        let mut node: Option<&Value> = None;

        for segment in path.segments() {
            let next = cursor.and_then(|map| map.get(segment.as_str()));
            match next {
                Some(value) => {
                    node = Some(value);
                    cursor = value.as_object();
                },
                None => return Err(TokenError::path_not_found(reference, segment.clone())),
            }
        }

        node.ok_or_else(|| TokenError::path_not_found(reference, ""))
    }

    /// The declared `$value` of the node at `path`.
    pub fn declared_value(&self, path: &TokenPath, reference: &str) -> TokenResult<&Value> {
        self.lookup(path, reference)?
            .as_object()
            .and_then(|node| node.get(VALUE_KEY))
            .ok_or_else(|| TokenError::no_value(path.to_string()))
    }

    /// Every token path in the tree, in document order.
    pub fn token_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_token_paths(&self.root, &mut Vec::new(), &mut paths);
        paths
    }
}

fn collect_token_paths(map: &Map<String, Value>, prefix: &mut Vec<String>, out: &mut Vec<String>) {
    for (key, value) in map {
        let Some(child) = value.as_object() else {
            continue;
        };
        prefix.push(key.clone());
        if child.contains_key(VALUE_KEY) {
            out.push(prefix.join("."));
        } else {
            collect_token_paths(child, prefix, out);
        }
        prefix.pop();
    }
}
