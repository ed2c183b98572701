//! ParserManager: owns one tree-sitter parser per dialect and rejects
//! trees that contain syntax errors.

use std::collections::hash_map::Entry;
use std::path::PathBuf;

use envcheck_core::errors::parse_error::INLINE_SOURCE;
use envcheck_core::errors::ParseError;
use envcheck_core::types::collections::FxHashMap;
use tree_sitter::{Parser, Tree};

use super::error_tolerant::{count_errors, first_error};
use crate::scanner::Dialect;

/// Parsers are created on first use and reused for every later file of
/// the same dialect.
#[derive(Default)]
pub struct ParserManager {
    parsers: FxHashMap<Dialect, Parser>,
}

impl ParserManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `source` with the grammar for `dialect`.
    ///
    /// Errors carry the placeholder path `<source>`; callers that know the
    /// file relabel them with [`ParseError::at_path`].
    pub fn parse(&mut self, source: &str, dialect: Dialect) -> Result<Tree, ParseError> {
        let parser = self.parser_for(dialect)?;
        let tree = parser.parse(source, None).ok_or_else(|| ParseError::NoTree {
            path: PathBuf::from(INLINE_SOURCE),
        })?;

        if let Some(position) = first_error(&tree) {
            tracing::debug!(
                %dialect,
                errors = count_errors(&tree),
                line = position.line,
                column = position.column,
                "syntax errors in source"
            );
            return Err(ParseError::Syntax {
                path: PathBuf::from(INLINE_SOURCE),
                line: position.line,
                column: position.column,
            });
        }

        Ok(tree)
    }

    fn parser_for(&mut self, dialect: Dialect) -> Result<&mut Parser, ParseError> {
        match self.parsers.entry(dialect) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let mut parser = Parser::new();
                parser
                    .set_language(&dialect.ts_language())
                    .map_err(|e| ParseError::GrammarLoad {
                        dialect: dialect.name().to_string(),
                        message: e.to_string(),
                    })?;
                Ok(entry.insert(parser))
            }
        }
    }
}
