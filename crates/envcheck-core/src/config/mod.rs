//! Configuration system for envcheck.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod check_config;
pub mod env_file_config;
pub mod envcheck_config;
pub mod scan_config;

pub use check_config::{CheckConfig, EmptyValuePolicy, ParseErrorPolicy};
pub use env_file_config::EnvFileConfig;
pub use envcheck_config::{CliOverrides, EnvCheckConfig};
pub use scan_config::ScanConfig;
