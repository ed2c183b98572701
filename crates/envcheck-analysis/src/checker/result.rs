//! Scan result and the builder that accumulates it.

use std::fmt;
use std::path::{Path, PathBuf};

use envcheck_core::config::EmptyValuePolicy;
use envcheck_core::types::collections::{BTreeMap, FxHashMap, FxHashSet};
use serde::Serialize;

use super::snapshot::EnvSnapshot;
use crate::environment::EnvReference;

/// Where a variable was first referenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

/// A file left out of the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub entries_ignored: usize,
    pub duration_ms: u64,
}

/// Outcome of one check run.
///
/// `missing` is always a subset of `found`, neither contains duplicates,
/// and `is_complete` is true exactly when `missing` is empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<PathBuf>,
    found: Vec<String>,
    missing: Vec<String>,
    is_complete: bool,
    first_seen: BTreeMap<String, Location>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<SkippedFile>,
    stats: ScanStats,
}

impl ScanResult {
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Distinct referenced names, in order of first occurrence.
    pub fn found(&self) -> &[String] {
        &self.found
    }

    /// Referenced names that are unset in the environment snapshot.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn first_seen(&self, name: &str) -> Option<&Location> {
        self.first_seen.get(name)
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}

/// Accumulates references across files, then classifies once.
#[derive(Debug, Default)]
pub(crate) struct ResultBuilder {
    order: Vec<String>,
    first_seen: FxHashMap<String, Location>,
    skipped: Vec<SkippedFile>,
}

impl ResultBuilder {
    /// Merge one file's references. Returns the number of distinct names
    /// in `references`.
    pub(crate) fn add_references(
        &mut self,
        file: Option<&Path>,
        references: &[EnvReference],
    ) -> usize {
        let mut local = FxHashSet::default();
        for reference in references {
            if !local.insert(reference.name.as_str()) {
                continue;
            }

            if !self.first_seen.contains_key(&reference.name) {
                self.order.push(reference.name.clone());
                self.first_seen.insert(
                    reference.name.clone(),
                    Location {
                        file: file.map(Path::to_path_buf),
                        line: reference.line,
                        column: reference.column,
                    },
                );
            }
        }
        local.len()
    }

    pub(crate) fn skip(&mut self, path: PathBuf, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            path,
            reason: reason.into(),
        });
    }

    pub(crate) fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub(crate) fn finish(
        self,
        root: Option<PathBuf>,
        env: &EnvSnapshot,
        policy: EmptyValuePolicy,
        stats: ScanStats,
    ) -> ScanResult {
        let missing: Vec<String> = self
            .order
            .iter()
            .filter(|name| !env.is_set(name, policy))
            .cloned()
            .collect();

        ScanResult {
            root,
            is_complete: missing.is_empty(),
            found: self.order,
            missing,
            first_seen: self.first_seen.into_iter().collect(),
            skipped: self.skipped,
            stats,
        }
    }
}
