//! Checker: collect, extract, classify.

mod checker;
mod result;
mod snapshot;

pub use checker::{check_source, Checker};
pub use result::{Location, ScanResult, ScanStats, SkippedFile};
pub use snapshot::EnvSnapshot;
