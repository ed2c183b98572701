//! Top-level envcheck configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CheckConfig, EnvFileConfig, ParseErrorPolicy, ScanConfig};
use crate::constants::{PROJECT_CONFIG_FILE, SUPPORTED_EXTENSIONS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ENVCHECK_*`)
/// 3. Project config (`envcheck.toml` in the scan root, or an explicit file)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnvCheckConfig {
    pub scan: ScanConfig,
    pub check: CheckConfig,
    pub env: EnvFileConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub extensions: Option<Vec<String>>,
    /// Appended to, not replacing, the configured patterns.
    pub extra_ignore: Vec<String>,
    pub empty_is_missing: Option<bool>,
    pub on_parse_error: Option<ParseErrorPolicy>,
    pub env_file: Option<String>,
    pub load_env_file: Option<bool>,
}

impl EnvCheckConfig {
    /// Load configuration with layered resolution.
    ///
    /// `config_file`, when given, replaces the `envcheck.toml` lookup in `root`
    /// and must exist.
    pub fn load(
        root: &Path,
        config_file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        match config_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.is_file() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &EnvCheckConfig) -> Result<(), ConfigError> {
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for ext in config.scan.effective_extensions() {
            if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.extensions".to_string(),
                    message: format!(
                        "unsupported extension {ext:?} (expected one of {})",
                        SUPPORTED_EXTENSIONS.join(", ")
                    ),
                });
            }
        }
        if config.env.file.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "env.file".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut EnvCheckConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: EnvCheckConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut EnvCheckConfig, other: &EnvCheckConfig) {
        // Scan
        if !other.scan.extensions.is_empty() {
            base.scan.extensions = other.scan.extensions.clone();
        }
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if !other.scan.ignore_files.is_empty() {
            base.scan.ignore_files = other.scan.ignore_files.clone();
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }

        // Check
        if other.check.empty_is_missing.is_some() {
            base.check.empty_is_missing = other.check.empty_is_missing;
        }
        if other.check.on_parse_error.is_some() {
            base.check.on_parse_error = other.check.on_parse_error;
        }

        // Env file
        if other.env.file.is_some() {
            base.env.file = other.env.file.clone();
        }
        if other.env.load.is_some() {
            base.env.load = other.env.load;
        }
    }

    /// Apply environment variable overrides.
    /// Values that do not parse are rejected like invalid TOML values.
    fn apply_env_overrides(config: &mut EnvCheckConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("ENVCHECK_EXTENSIONS") {
            config.scan.extensions = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Ok(val) = std::env::var("ENVCHECK_EMPTY_IS_MISSING") {
            let v = val.parse::<bool>().map_err(|_| ConfigError::ValidationFailed {
                field: "ENVCHECK_EMPTY_IS_MISSING".to_string(),
                message: format!("expected true or false, got {val:?}"),
            })?;
            config.check.empty_is_missing = Some(v);
        }
        if let Ok(val) = std::env::var("ENVCHECK_ON_PARSE_ERROR") {
            let v = val
                .parse::<ParseErrorPolicy>()
                .map_err(|message| ConfigError::ValidationFailed {
                    field: "ENVCHECK_ON_PARSE_ERROR".to_string(),
                    message,
                })?;
            config.check.on_parse_error = Some(v);
        }
        if let Ok(val) = std::env::var("ENVCHECK_ENV_FILE") {
            config.env.file = Some(val);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut EnvCheckConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.extensions {
            config.scan.extensions = v.clone();
        }
        config.scan.extra_ignore.extend(cli.extra_ignore.iter().cloned());
        if let Some(v) = cli.empty_is_missing {
            config.check.empty_is_missing = Some(v);
        }
        if let Some(v) = cli.on_parse_error {
            config.check.on_parse_error = Some(v);
        }
        if let Some(ref v) = cli.env_file {
            config.env.file = Some(v.clone());
        }
        if let Some(v) = cli.load_env_file {
            config.env.load = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
