//! # Theme Assembler
//!
//! Turns a [TokenTree] into a complete [Theme].
//!
//! Assembly walks the field table in four phases:
//!
//! 1. semantic fields sourced from the tree
//! 2. semantic fields derived from constants or other semantic fields
//! 3. component fields sourced from the tree
//! 4. component fields derived from resolved values
//!
//! Derived fields inside a phase are evaluated in dependency order. A derived
//! field whose dependency is not resolved by the end of its phase fails the
//! assembly; nothing is ever evaluated against a missing value. Any failure
//! aborts the whole assembly, so a partial theme is never returned.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use cast_tokens::{ResolvedValue, TokenTree};

use crate::error::{ThemeError, ThemeResult};
use crate::fields::{Derivation, FieldSource, FieldSpec, Tier, THEME_FIELDS};
use crate::schema::Theme;

/// Resolved values keyed by theme field, in resolution order.
pub type ResolvedFields = IndexMap<&'static str, ResolvedValue>;

/// Assembles themes from one token tree against a field table.
pub struct Assembler<'a> {
    tree: &'a TokenTree,
    fields: &'a [FieldSpec],
}

impl<'a> Assembler<'a> {
    /// Create an assembler using the full theme schema.
    pub fn new(tree: &'a TokenTree) -> Self {
        Self::with_fields(tree, THEME_FIELDS)
    }

    /// Create an assembler for a custom field table.
    pub fn with_fields(tree: &'a TokenTree, fields: &'a [FieldSpec]) -> Self {
        Self { tree, fields }
    }

    /// Assemble a complete theme called `name`.
    pub fn assemble(&self, name: &str) -> ThemeResult<Theme> {
        let document = self.assemble_value(name)?;
        Theme::from_value(document)
    }

    /// Assemble the value form of a theme without converting it to [Theme].
    pub fn assemble_value(&self, name: &str) -> ThemeResult<Value> {
        let resolved = self.resolve_fields()?;

        let mut document = Map::new();
        document.insert("name".to_string(), Value::String(name.to_string()));
        for (field, value) in &resolved {
            insert_at(&mut document, field, value.to_json())?;
        }

        log::debug!("Assembled theme '{}' ({} fields)", name, resolved.len());
        Ok(Value::Object(document))
    }

    /// Resolve every field of the table, in phase order.
    pub fn resolve_fields(&self) -> ThemeResult<ResolvedFields> {
        let mut resolved = ResolvedFields::new();
        for tier in [Tier::Semantic, Tier::Component] {
            self.resolve_sourced(tier, &mut resolved)?;
            self.resolve_derived(tier, &mut resolved)?;
        }
        Ok(resolved)
    }

    fn resolve_sourced(&self, tier: Tier, resolved: &mut ResolvedFields) -> ThemeResult<()> {
        let mut count = 0;
        for spec in self.fields.iter().filter(|spec| spec.tier() == tier) {
            let FieldSource::Sourced { path, kind } = spec.source else {
                continue;
            };

            let value = self.tree.resolve_at_path(path)?;
            if !kind.matches(&value) {
                return Err(ThemeError::TypeMismatch {
                    field: spec.field.to_string(),
                    path: path.to_string(),
                    expected: kind.name(),
                    found: value.kind_name(),
                });
            }

            resolved.insert(spec.field, value);
            count += 1;
        }
        log::debug!("Resolved {} sourced {:?} fields", count, tier);
        Ok(())
    }

    fn resolve_derived(&self, tier: Tier, resolved: &mut ResolvedFields) -> ThemeResult<()> {
        let mut pending: Vec<(&'static str, Derivation)> = self
            .fields
            .iter()
            .filter(|spec| spec.tier() == tier)
            .filter_map(|spec| match spec.source {
                FieldSource::Derived(derivation) => Some((spec.field, derivation)),
                FieldSource::Sourced { .. } => None,
            })
            .collect();
        let total = pending.len();

        // Each pass settles every field whose dependency is available; a pass
        // that settles nothing means the rest can never resolve.
        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|&(field, derivation)| match derivation {
                Derivation::Constant(value) => {
                    resolved.insert(field, ResolvedValue::Number(value));
                    false
                },
                Derivation::Field(dependency) => match resolved.get(dependency).cloned() {
                    Some(value) => {
                        resolved.insert(field, value);
                        false
                    },
                    None => true,
                },
            });

            if pending.len() == before {
                let (field, derivation) = pending[0];
                let dependency = match derivation {
                    Derivation::Field(dependency) => dependency,
                    Derivation::Constant(_) => "",
                };
                return Err(ThemeError::UnresolvedDependency {
                    field: field.to_string(),
                    dependency: dependency.to_string(),
                });
            }
        }

        log::debug!("Derived {} {:?} fields", total, tier);
        Ok(())
    }
}

/// Assemble the theme `name` from `tree` using the full schema.
pub fn assemble(tree: &TokenTree, name: &str) -> ThemeResult<Theme> {
    Assembler::new(tree).assemble(name)
}

/// Write `value` at the dot path `field`, creating intermediate objects.
fn insert_at(document: &mut Map<String, Value>, field: &str, value: Value) -> ThemeResult<()> {
    let mut segments = field.split('.').peekable();
    let mut cursor = document;

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            cursor.insert(segment.to_string(), value);
            return Ok(());
        }
        let child = cursor
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        cursor = child
            .as_object_mut()
            .ok_or_else(|| ThemeError::shape(format!("field '{}' is nested under a leaf", field)))?;
    }

    Ok(())
}
