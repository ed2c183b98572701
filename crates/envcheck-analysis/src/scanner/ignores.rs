//! Gitignore-style ignore rules read from the scan root.

use std::path::{Path, PathBuf};

use envcheck_core::errors::ScanError;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Ignore matcher built once per run.
pub struct IgnoreRules {
    gitignore: Gitignore,
    sources: Vec<PathBuf>,
}

impl IgnoreRules {
    /// A rule set that ignores nothing.
    pub fn empty() -> Self {
        Self {
            gitignore: Gitignore::empty(),
            sources: Vec::new(),
        }
    }

    /// Build the rule set from the ignore files found in `root` plus extra
    /// patterns.
    ///
    /// Missing ignore files are skipped. Lines with invalid globs are
    /// logged and dropped; an unreadable ignore file is an error.
    pub fn load(
        root: &Path,
        ignore_files: &[String],
        extra_patterns: &[String],
    ) -> Result<Self, ScanError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut sources = Vec::new();

        for name in ignore_files {
            let path = root.join(name);
            if !path.is_file() {
                continue;
            }
            if let Some(err) = builder.add(&path) {
                if err.is_io() {
                    return Err(ScanError::IgnoreFile {
                        path,
                        message: err.to_string(),
                    });
                }
                tracing::warn!(path = %path.display(), error = %err, "skipping invalid ignore rules");
            }
            sources.push(path);
        }

        for pattern in extra_patterns {
            builder
                .add_line(None, pattern)
                .map_err(|e| ScanError::IgnoreFile {
                    path: PathBuf::from("scan.extra_ignore"),
                    message: e.to_string(),
                })?;
        }

        let gitignore = builder.build().map_err(|e| ScanError::IgnoreFile {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            rules = gitignore.num_ignores() + gitignore.num_whitelists(),
            files = sources.len(),
            "ignore rules loaded"
        );

        Ok(Self { gitignore, sources })
    }

    /// Check a root-relative path against the rules.
    pub fn is_ignored(&self, relative: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(relative, is_dir).is_ignore()
    }

    /// Ignore files that contributed rules.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.gitignore.is_empty()
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::empty()
    }
}
