//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use envcheck_analysis::report::ReportFormat;
use envcheck_core::config::{CliOverrides, ParseErrorPolicy};

/// Report environment variables referenced in JavaScript/TypeScript
/// sources that are not set.
#[derive(Debug, Parser)]
#[command(name = "envcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Dotenv file to load before checking (default: .env)
    #[arg(long, value_name = "FILE")]
    pub env_file: Option<String>,

    /// Do not load any dotenv file
    #[arg(long, conflicts_with = "env_file")]
    pub no_env_file: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Human)]
    pub format: Format,

    /// Extra gitignore-style pattern to skip (repeatable)
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Source extensions to scan, comma separated (e.g. js,ts)
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Treat variables set to the empty string as present
    #[arg(long)]
    pub empty_is_set: bool,

    /// Skip files that fail to parse instead of aborting
    #[arg(long)]
    pub skip_unparsable: bool,

    /// Config file (overrides envcheck.toml in the scan root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Human,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => ReportFormat::Human,
            Format::Json => ReportFormat::Json,
        }
    }
}

impl Cli {
    /// Flags that map onto config fields. Unset flags leave the lower
    /// layers alone.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            extensions: self.extensions.clone(),
            extra_ignore: self.ignore.clone(),
            empty_is_missing: self.empty_is_set.then_some(false),
            on_parse_error: self.skip_unparsable.then_some(ParseErrorPolicy::Skip),
            env_file: self.env_file.clone(),
            load_env_file: self.no_env_file.then_some(false),
        }
    }
}
