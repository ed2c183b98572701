//! Scanner subsystem: source file discovery and ignore filtering.
//!
//! Walks the scan root depth-first in directory-listing order, skips every
//! entry the ignore rules match (directories are not descended into), and
//! keeps files whose extension maps to a known [`Dialect`].

pub mod collector;
pub mod dialect;
pub mod ignores;
pub mod types;

pub use collector::FileCollector;
pub use dialect::Dialect;
pub use ignores::IgnoreRules;
pub use types::{Collection, SourceFile};
