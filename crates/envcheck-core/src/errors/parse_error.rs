//! Parser errors.

use std::path::{Path, PathBuf};

use super::error_code::{self, EnvCheckErrorCode};

/// Placeholder path for text that did not come from a file.
pub const INLINE_SOURCE: &str = "<source>";

/// Errors that can occur while parsing a source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load {dialect} grammar: {message}")]
    GrammarLoad { dialect: String, message: String },

    #[error("Syntax error in {path} at {line}:{column}")]
    Syntax {
        path: PathBuf,
        line: u32,
        column: u32,
    },

    #[error("Parser produced no syntax tree for {path}")]
    NoTree { path: PathBuf },
}

impl ParseError {
    /// Re-label an error produced for inline text with the file it came from.
    pub fn at_path(self, file: &Path) -> Self {
        match self {
            Self::Syntax { line, column, .. } => Self::Syntax {
                path: file.to_path_buf(),
                line,
                column,
            },
            Self::NoTree { .. } => Self::NoTree {
                path: file.to_path_buf(),
            },
            other => other,
        }
    }
}

impl EnvCheckErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::GrammarLoad { .. } => error_code::GRAMMAR_ERROR,
            _ => error_code::PARSE_ERROR,
        }
    }
}
