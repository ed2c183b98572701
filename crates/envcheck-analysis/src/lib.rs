//! envcheck-analysis: find `process.env.NAME` references and check them
//! against an environment snapshot.
//!
//! - [`scanner`]: source file collection with gitignore-style filtering
//! - [`parsers`]: tree-sitter parsing per source dialect
//! - [`environment`]: `process.env.NAME` extraction from syntax trees
//! - [`checker`]: run orchestration and found/missing classification
//! - [`report`]: human and JSON rendering of a scan result

pub mod checker;
pub mod environment;
pub mod parsers;
pub mod report;
pub mod scanner;

pub use checker::{check_source, Checker, EnvSnapshot, ScanResult};
pub use environment::{extract_env_vars, EnvExtractor, EnvReference};
pub use scanner::{Dialect, FileCollector, IgnoreRules};
