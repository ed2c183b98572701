//! Error handling for envcheck.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod check_error;
pub mod config_error;
pub mod error_code;
pub mod parse_error;
pub mod scan_error;

pub use check_error::CheckError;
pub use config_error::ConfigError;
pub use error_code::EnvCheckErrorCode;
pub use parse_error::ParseError;
pub use scan_error::ScanError;
