//! File collection and reading errors.

use std::path::PathBuf;

use super::error_code::{self, EnvCheckErrorCode};

/// Errors that can occur while collecting or reading source files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported encoding in {path}: {encoding}")]
    UnsupportedEncoding { path: PathBuf, encoding: String },

    #[error("Invalid ignore rules in {path}: {message}")]
    IgnoreFile { path: PathBuf, message: String },
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl EnvCheckErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::SCAN_ERROR,
            Self::UnsupportedEncoding { .. } => error_code::UNSUPPORTED_ENCODING,
            Self::IgnoreFile { .. } => error_code::IGNORE_FILE_ERROR,
        }
    }
}
