//! Classification and failure-policy configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a variable that is set to the empty string is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyValuePolicy {
    /// `FOO=` counts as unset and is reported missing.
    #[default]
    Missing,
    /// `FOO=` counts as set.
    Present,
}

/// What the checker does when a file fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Abort the whole run with the parse error.
    #[default]
    Abort,
    /// Skip the file, record it, and keep going.
    Skip,
}

impl FromStr for ParseErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("expected \"abort\" or \"skip\", got {other:?}")),
        }
    }
}

impl fmt::Display for ParseErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        })
    }
}

/// Configuration for the checker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckConfig {
    /// Treat variables set to the empty string as missing. Default: true.
    pub empty_is_missing: Option<bool>,
    /// Parse failure handling. Default: abort.
    pub on_parse_error: Option<ParseErrorPolicy>,
}

impl CheckConfig {
    pub fn effective_empty_policy(&self) -> EmptyValuePolicy {
        if self.empty_is_missing.unwrap_or(true) {
            EmptyValuePolicy::Missing
        } else {
            EmptyValuePolicy::Present
        }
    }

    pub fn effective_parse_error_policy(&self) -> ParseErrorPolicy {
        self.on_parse_error.unwrap_or_default()
    }
}
