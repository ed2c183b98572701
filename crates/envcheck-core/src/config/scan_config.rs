//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_IGNORE_FILES, DEFAULT_MAX_FILE_SIZE};

/// Configuration for the file collector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Source extensions to collect, with or without a leading dot.
    /// Default: every supported extension.
    pub extensions: Vec<String>,
    /// Additional gitignore-style patterns, applied after the ignore files.
    pub extra_ignore: Vec<String>,
    /// Ignore files read from the scan root. Default: `.gitignore`, `.envcheckignore`.
    pub ignore_files: Vec<String>,
    /// Maximum file size in bytes. Larger files are skipped. Default: 10 MiB.
    pub max_file_size: Option<u64>,
}

impl ScanConfig {
    /// Returns the configured extensions, lowercased and without leading dots.
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            return DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();
        }
        self.extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .collect()
    }

    /// Returns the ignore file names, defaulting to `.gitignore` and `.envcheckignore`.
    pub fn effective_ignore_files(&self) -> Vec<String> {
        if self.ignore_files.is_empty() {
            DEFAULT_IGNORE_FILES.iter().map(|f| f.to_string()).collect()
        } else {
            self.ignore_files.clone()
        }
    }

    /// Returns the effective max file size, defaulting to 10 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }
}
