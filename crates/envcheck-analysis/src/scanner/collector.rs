//! Recursive source file collector.

use std::fs;
use std::path::Path;

use envcheck_core::config::ScanConfig;
use envcheck_core::errors::ScanError;
use envcheck_core::types::collections::FxHashSet;

use super::dialect::Dialect;
use super::ignores::IgnoreRules;
use super::types::{Collection, SourceFile};

/// Collects candidate source files under a root directory.
pub struct FileCollector {
    extensions: FxHashSet<String>,
    max_file_size: u64,
}

impl FileCollector {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            extensions: config.effective_extensions().into_iter().collect(),
            max_file_size: config.effective_max_file_size(),
        }
    }

    /// Walk `root` and return every matching, non-ignored source file.
    ///
    /// Any filesystem error (missing root, unreadable directory, broken
    /// entry) aborts the walk.
    pub fn collect(&self, root: &Path, rules: &IgnoreRules) -> Result<Collection, ScanError> {
        let mut collection = Collection::default();
        self.walk_dir(root, root, rules, &mut collection)?;
        Ok(collection)
    }

    fn walk_dir(
        &self,
        root: &Path,
        dir: &Path,
        rules: &IgnoreRules,
        out: &mut Collection,
    ) -> Result<(), ScanError> {
        let entries = fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| ScanError::io(dir, e))?;
            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(&path);
            // Follows symlinks.
            let metadata = fs::metadata(&path).map_err(|e| ScanError::io(&path, e))?;

            if rules.is_ignored(relative, metadata.is_dir()) {
                tracing::trace!(path = %relative.display(), "ignored");
                out.ignored += 1;
                continue;
            }

            if metadata.is_dir() {
                self.walk_dir(root, &path, rules, out)?;
                continue;
            }

            let Some(dialect) = self.dialect_for(&path) else {
                continue;
            };

            let file_size = metadata.len();
            if file_size > self.max_file_size {
                tracing::debug!(path = %relative.display(), file_size, "skipping oversized file");
                out.oversized.push(path);
                continue;
            }

            out.files.push(SourceFile {
                path,
                dialect,
                file_size,
            });
        }

        Ok(())
    }

    fn dialect_for(&self, path: &Path) -> Option<Dialect> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if !self.extensions.contains(&ext) {
            return None;
        }
        Dialect::from_extension(Some(&ext))
    }
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restricted_extensions_skip_other_dialects() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.js"), "").unwrap();
        std::fs::write(dir.path().join("b.ts"), "").unwrap();
        std::fs::write(dir.path().join("c.md"), "").unwrap();

        let config = ScanConfig {
            extensions: vec!["js".to_string()],
            ..Default::default()
        };
        let collection = FileCollector::new(&config)
            .collect(dir.path(), &IgnoreRules::empty())
            .unwrap();

        assert_eq!(collection.files.len(), 1);
        assert!(collection.files[0].path.ends_with("a.js"));
        assert_eq!(collection.files[0].dialect, Dialect::PlainScript);
    }

    #[test]
    fn oversized_files_are_reported_not_collected() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("big.js"), "x".repeat(64)).unwrap();
        std::fs::write(dir.path().join("small.js"), "1").unwrap();

        let config = ScanConfig {
            max_file_size: Some(16),
            ..Default::default()
        };
        let collection = FileCollector::new(&config)
            .collect(dir.path(), &IgnoreRules::empty())
            .unwrap();

        assert_eq!(collection.files.len(), 1);
        assert_eq!(collection.oversized.len(), 1);
        assert!(collection.oversized[0].ends_with("big.js"));
    }

    #[test]
    fn missing_root_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = FileCollector::default()
            .collect(&dir.path().join("absent"), &IgnoreRules::empty())
            .unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }
}
