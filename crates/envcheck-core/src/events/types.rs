//! Event payload types.

use std::path::PathBuf;

/// Payload for `on_scan_started`.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub root: PathBuf,
    pub file_count: usize,
}

/// Payload for `on_file_checked`.
#[derive(Debug, Clone)]
pub struct FileCheckedEvent {
    pub path: PathBuf,
    /// Distinct names referenced in this file.
    pub names: usize,
}

/// Payload for `on_file_skipped`.
#[derive(Debug, Clone)]
pub struct FileSkippedEvent {
    pub path: PathBuf,
    pub reason: String,
}

/// Payload for `on_scan_complete`.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub found: usize,
    pub missing: usize,
    pub duration_ms: u64,
}
