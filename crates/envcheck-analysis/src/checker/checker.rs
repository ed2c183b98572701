//! Run orchestration: ignore rules, collection, extraction, classification.

use std::path::Path;
use std::time::Instant;

use envcheck_core::config::{EmptyValuePolicy, EnvCheckConfig, ParseErrorPolicy};
use envcheck_core::errors::{CheckError, ParseError, ScanError};
use envcheck_core::events::types::{
    FileCheckedEvent, FileSkippedEvent, ScanCompleteEvent, ScanStartedEvent,
};
use envcheck_core::events::CheckEventHandler;

use super::result::{ResultBuilder, ScanResult, ScanStats};
use super::snapshot::EnvSnapshot;
use crate::environment::{EnvExtractor, EnvReference};
use crate::scanner::{Dialect, FileCollector, IgnoreRules, SourceFile};

/// Checks a directory tree for referenced but unset environment variables.
pub struct Checker {
    config: EnvCheckConfig,
}

impl Checker {
    pub fn new(config: EnvCheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnvCheckConfig {
        &self.config
    }

    /// Scan `root` and classify every referenced name against `env`.
    ///
    /// I/O errors always abort. Parse errors abort unless the config says
    /// `on_parse_error = "skip"`, in which case the file is recorded in
    /// [`ScanResult::skipped`].
    pub fn check(
        &self,
        root: &Path,
        env: &EnvSnapshot,
        handler: &dyn CheckEventHandler,
    ) -> Result<ScanResult, CheckError> {
        let start = Instant::now();
        let scan = &self.config.scan;

        let rules = IgnoreRules::load(root, &scan.effective_ignore_files(), &scan.extra_ignore)?;
        let collection = FileCollector::new(scan).collect(root, &rules)?;

        tracing::info!(
            root = %root.display(),
            files = collection.files.len(),
            ignored = collection.ignored,
            "collected source files"
        );
        handler.on_scan_started(&ScanStartedEvent {
            root: root.to_path_buf(),
            file_count: collection.files.len(),
        });

        let mut builder = ResultBuilder::default();
        for path in collection.oversized {
            let reason = format!(
                "larger than max_file_size ({} bytes)",
                scan.effective_max_file_size()
            );
            handler.on_file_skipped(&FileSkippedEvent {
                path: path.clone(),
                reason: reason.clone(),
            });
            builder.skip(path, reason);
        }

        let mut extractor = EnvExtractor::new();
        let mut files_scanned = 0;
        for file in &collection.files {
            match self.check_file(file, &mut extractor) {
                Ok(references) => {
                    let names = builder.add_references(Some(&file.path), &references);
                    tracing::debug!(path = %file.path.display(), dialect = %file.dialect, names, "checked");
                    handler.on_file_checked(&FileCheckedEvent {
                        path: file.path.clone(),
                        names,
                    });
                    files_scanned += 1;
                }
                Err(CheckError::Parse(err))
                    if self.config.check.effective_parse_error_policy() == ParseErrorPolicy::Skip =>
                {
                    tracing::warn!(path = %file.path.display(), error = %err, "skipping unparsable file");
                    handler.on_file_skipped(&FileSkippedEvent {
                        path: file.path.clone(),
                        reason: err.to_string(),
                    });
                    builder.skip(file.path.clone(), err.to_string());
                }
                Err(err) => return Err(err),
            }
        }

        let stats = ScanStats {
            files_scanned,
            files_skipped: builder.skipped_count(),
            entries_ignored: collection.ignored,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        let result = builder.finish(
            Some(root.to_path_buf()),
            env,
            self.config.check.effective_empty_policy(),
            stats,
        );

        handler.on_scan_complete(&ScanCompleteEvent {
            files_scanned: result.stats().files_scanned,
            files_skipped: result.stats().files_skipped,
            found: result.found().len(),
            missing: result.missing().len(),
            duration_ms: result.stats().duration_ms,
        });

        Ok(result)
    }

    fn check_file(
        &self,
        file: &SourceFile,
        extractor: &mut EnvExtractor,
    ) -> Result<Vec<EnvReference>, CheckError> {
        let bytes = std::fs::read(&file.path).map_err(|e| ScanError::io(&file.path, e))?;
        let source = String::from_utf8(bytes).map_err(|e| ScanError::UnsupportedEncoding {
            path: file.path.clone(),
            encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
        })?;

        extractor
            .extract_references(&source, file.dialect)
            .map_err(|e| CheckError::Parse(e.at_path(&file.path)))
    }
}

/// Check a single source text without touching the filesystem.
///
/// Locations in the result carry no file path.
pub fn check_source(
    source: &str,
    dialect: Dialect,
    env: &EnvSnapshot,
    policy: EmptyValuePolicy,
) -> Result<ScanResult, ParseError> {
    let start = Instant::now();
    let references = EnvExtractor::new().extract_references(source, dialect)?;

    let mut builder = ResultBuilder::default();
    builder.add_references(None, &references);
    let stats = ScanStats {
        files_scanned: 1,
        duration_ms: start.elapsed().as_millis() as u64,
        ..Default::default()
    };
    Ok(builder.finish(None, env, policy, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "const a = process.env.API_KEY; const b = process.env.BASE_URL;";

    #[test]
    fn check_source_classifies_against_snapshot() {
        let env: EnvSnapshot = [("API_KEY", "x")].into_iter().collect();
        let result = check_source(BASIC, Dialect::PlainScript, &env, EmptyValuePolicy::Missing).unwrap();

        assert_eq!(result.found(), ["API_KEY", "BASE_URL"]);
        assert_eq!(result.missing(), ["BASE_URL"]);
        assert!(!result.is_complete());
    }

    #[test]
    fn empty_string_policy_is_explicit() {
        let env: EnvSnapshot = [("API_KEY", ""), ("BASE_URL", "http://x")].into_iter().collect();

        let strict = check_source(BASIC, Dialect::PlainScript, &env, EmptyValuePolicy::Missing).unwrap();
        assert_eq!(strict.missing(), ["API_KEY"]);

        let lenient = check_source(BASIC, Dialect::PlainScript, &env, EmptyValuePolicy::Present).unwrap();
        assert!(lenient.missing().is_empty());
        assert!(lenient.is_complete());
    }
}
