//! Types for extracted environment variable references.

use serde::{Deserialize, Serialize};

/// One `process.env.NAME` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvReference {
    /// Variable name
    pub name: String,
    /// 1-based line of the `process` identifier
    pub line: u32,
    /// 1-based column of the `process` identifier
    pub column: u32,
}
