//! EnvCheckErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so the CLI and JSON output can report
/// a stable code alongside the human message.
pub trait EnvCheckErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const UNSUPPORTED_ENCODING: &str = "UNSUPPORTED_ENCODING";
pub const IGNORE_FILE_ERROR: &str = "IGNORE_FILE_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const GRAMMAR_ERROR: &str = "GRAMMAR_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
