//! Dotenv loading configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ENV_FILE;

/// Configuration for the dotenv file the CLI loads before checking.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnvFileConfig {
    /// Path of the dotenv file, relative to the working directory. Default: `.env`.
    pub file: Option<String>,
    /// Whether to load the dotenv file at all. Default: true.
    pub load: Option<bool>,
}

impl EnvFileConfig {
    pub fn effective_file(&self) -> &str {
        self.file.as_deref().unwrap_or(DEFAULT_ENV_FILE)
    }

    pub fn effective_load(&self) -> bool {
        self.load.unwrap_or(true)
    }
}
