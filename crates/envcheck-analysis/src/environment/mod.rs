//! Environment variable reference extraction.
//!
//! Recognizes exactly the static chain `process.env.NAME`, with or without
//! parentheses around `process` or `process.env`. Aliases, destructuring,
//! and computed access (`process.env[name]`) are not followed. Type-level
//! `typeof process.env.NAME` is not a read and is skipped.

mod extractor;
mod types;

pub use extractor::{extract_env_vars, EnvExtractor};
pub use types::EnvReference;
