//! Tree-sitter parsing, one lazily created parser per dialect.

pub mod error_tolerant;
pub mod manager;

pub use manager::ParserManager;
