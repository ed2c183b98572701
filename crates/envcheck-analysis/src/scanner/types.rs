//! Scanner data types.

use std::path::PathBuf;

use super::dialect::Dialect;

/// A collected source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub dialect: Dialect,
    pub file_size: u64,
}

/// Output of one collection pass.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Files to check, in traversal order.
    pub files: Vec<SourceFile>,
    /// Source files left out because they exceed the size limit.
    pub oversized: Vec<PathBuf>,
    /// Entries (files or directories) matched by an ignore rule.
    pub ignored: usize,
}
