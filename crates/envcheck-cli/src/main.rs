//! envcheck CLI entry point.

mod cli;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use envcheck_analysis::checker::{Checker, EnvSnapshot, ScanResult};
use envcheck_analysis::report::{write_report, ReportFormat};
use envcheck_core::config::{EnvCheckConfig, EnvFileConfig};
use envcheck_core::constants::DEFAULT_LOG_FILTER;
use envcheck_core::events::types::{FileSkippedEvent, ScanCompleteEvent, ScanStartedEvent};
use envcheck_core::events::CheckEventHandler;
use envcheck_core::tracing::init_tracing;

use cli::Cli;

const EXIT_MISSING: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "envcheck=info" } else { DEFAULT_LOG_FILTER });
    tracing::debug!(?cli, "envcheck starting");

    match run(&cli) {
        Ok(result) if result.is_complete() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_MISSING),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: &Cli) -> Result<ScanResult> {
    let root = resolve_root(cli.path.as_deref())?;
    let config = EnvCheckConfig::load(&root, cli.config.as_deref(), Some(&cli.overrides()))
        .context("failed to load configuration")?;

    if config.env.effective_load() {
        load_env_file(&config.env)?;
    }
    let env = EnvSnapshot::from_process();

    let format: ReportFormat = cli.format.into();
    if format == ReportFormat::Human {
        println!("Scanning directory: {}", root.display());
    }

    let result = Checker::new(config)
        .check(&root, &env, &LoggingHandler)
        .with_context(|| format!("failed to check {}", root.display()))?;

    // Missing variables go to stderr in human mode; JSON always goes to stdout.
    if format == ReportFormat::Human && !result.is_complete() {
        write_report(&result, format, &mut io::stderr().lock())?;
    } else {
        let mut stdout = io::stdout().lock();
        write_report(&result, format, &mut stdout)?;
        stdout.flush()?;
    }

    Ok(result)
}

fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    let path = path.unwrap_or(Path::new("."));
    std::path::absolute(path).with_context(|| format!("invalid path {}", path.display()))
}

/// Load the dotenv file into the process environment without overriding
/// variables that are already set.
///
/// A missing default `.env` is fine; a file named explicitly (flag, config,
/// or `ENVCHECK_ENV_FILE`) must exist.
fn load_env_file(env: &EnvFileConfig) -> Result<()> {
    let path = Path::new(env.effective_file());
    if !path.is_file() {
        if env.file.is_some() {
            bail!("env file {} not found", path.display());
        }
        tracing::debug!(path = %path.display(), "no env file");
        return Ok(());
    }

    dotenvy::from_path(path).with_context(|| format!("failed to load {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded env file");
    Ok(())
}

/// Mirrors check progress into the log.
struct LoggingHandler;

impl CheckEventHandler for LoggingHandler {
    fn on_scan_started(&self, event: &ScanStartedEvent) {
        tracing::info!(root = %event.root.display(), files = event.file_count, "scan started");
    }

    fn on_file_skipped(&self, event: &FileSkippedEvent) {
        tracing::info!(path = %event.path.display(), reason = %event.reason, "file skipped");
    }

    fn on_scan_complete(&self, event: &ScanCompleteEvent) {
        tracing::info!(
            files = event.files_scanned,
            skipped = event.files_skipped,
            found = event.found,
            missing = event.missing,
            duration_ms = event.duration_ms,
            "scan complete"
        );
    }
}
