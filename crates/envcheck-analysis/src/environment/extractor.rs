//! AST-based `process.env.NAME` extraction.

use envcheck_core::errors::ParseError;
use envcheck_core::types::collections::FxHashSet;
use tree_sitter::{Node, Tree};

use super::types::EnvReference;
use crate::parsers::ParserManager;
use crate::scanner::Dialect;

/// Extracts environment variable references from source text.
///
/// Holds a [`ParserManager`] so parsers are reused across files.
#[derive(Default)]
pub struct EnvExtractor {
    parsers: ParserManager,
}

impl EnvExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `process.env.NAME` occurrence, in source order.
    pub fn extract_references(
        &mut self,
        source: &str,
        dialect: Dialect,
    ) -> Result<Vec<EnvReference>, ParseError> {
        let tree = self.parsers.parse(source, dialect)?;
        Ok(collect_references(&tree, source.as_bytes()))
    }

    /// Distinct names, in order of first occurrence.
    pub fn extract_names(&mut self, source: &str, dialect: Dialect) -> Result<Vec<String>, ParseError> {
        let references = self.extract_references(source, dialect)?;
        Ok(distinct_names(references))
    }
}

/// Distinct environment variable names referenced in `source`.
///
/// Convenience wrapper that builds a throwaway [`EnvExtractor`].
pub fn extract_env_vars(source: &str, dialect: Dialect) -> Result<Vec<String>, ParseError> {
    EnvExtractor::new().extract_names(source, dialect)
}

fn distinct_names(references: Vec<EnvReference>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    references
        .into_iter()
        .filter(|r| seen.insert(r.name.clone()))
        .map(|r| r.name)
        .collect()
}

/// Pre-order walk over the whole tree with an explicit cursor.
fn collect_references(tree: &Tree, source: &[u8]) -> Vec<EnvReference> {
    let mut references = Vec::new();
    let mut cursor = tree.walk();

    'walk: loop {
        let node = cursor.node();
        if let Some(name) = env_member_name(&node, source) {
            let start = node.start_position();
            references.push(EnvReference {
                name: name.to_string(),
                line: start.row as u32 + 1,
                column: start.column as u32 + 1,
            });
        }

        // `typeof process.env.X` in a type position is never read at runtime.
        if node.kind() != "type_query" && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    references
}

/// Match `process.env.NAME` and return `NAME`.
///
/// The node must be a `member_expression` whose object is itself a
/// `member_expression` of identifier `process` and property `env`.
/// Parentheses around either object are transparent.
fn env_member_name<'a>(node: &Node, source: &'a [u8]) -> Option<&'a str> {
    let (object, property) = member_parts(node)?;
    let (base, env) = member_parts(&unparenthesize(object))?;

    let base = unparenthesize(base);
    if base.kind() != "identifier" || base.utf8_text(source).ok()? != "process" {
        return None;
    }
    if env.kind() != "property_identifier" || env.utf8_text(source).ok()? != "env" {
        return None;
    }
    if property.kind() != "property_identifier" {
        return None;
    }
    property.utf8_text(source).ok()
}

/// Object and property of a `member_expression`.
///
/// The property must follow the object in the source; anything else is a
/// node whose fields do not describe a runtime member read.
fn member_parts<'t>(node: &Node<'t>) -> Option<(Node<'t>, Node<'t>)> {
    if node.kind() != "member_expression" {
        return None;
    }
    let object = node.child_by_field_name("object")?;
    let property = node.child_by_field_name("property")?;
    (property.start_byte() >= object.end_byte()).then_some((object, property))
}

fn unparenthesize<'t>(mut node: Node<'t>) -> Node<'t> {
    while node.kind() == "parenthesized_expression" {
        match node.named_child(0) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}
