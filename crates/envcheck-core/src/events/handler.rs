//! CheckEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing a check run.
///
/// Handlers only override the events they care about.
pub trait CheckEventHandler {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_file_checked(&self, _event: &FileCheckedEvent) {}
    fn on_file_skipped(&self, _event: &FileSkippedEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}
}

/// Handler that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl CheckEventHandler for NoOpHandler {}
