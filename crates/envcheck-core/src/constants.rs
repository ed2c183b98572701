//! Shared constants for envcheck.

/// envcheck version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Files larger than this are skipped by the collector (default: 10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Every source extension the extractor has a grammar for.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// Extensions collected when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = SUPPORTED_EXTENSIONS;

/// Ignore files read from the scan root, in order.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[".gitignore", ".envcheckignore"];

/// Dotenv file loaded from the working directory by the CLI.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Project configuration file looked up at the scan root.
pub const PROJECT_CONFIG_FILE: &str = "envcheck.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "ENVCHECK_LOG";

/// Filter used when `ENVCHECK_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "envcheck=warn";
