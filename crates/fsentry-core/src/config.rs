//! Scan configuration -- exclusion sets and artifact locations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default baseline storage file name.
pub const DEFAULT_BASELINE_FILE: &str = "hashes.json";

/// Default audit trail file name.
pub const DEFAULT_AUDIT_FILE: &str = "integrity_log.txt";

/// Directory names never descended into.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &["venv", ".git"];

/// File extensions never fingerprinted.
pub const DEFAULT_IGNORE_EXTS: &[&str] = &[".pyc", ".log"];

/// Configuration for one integrity check.
///
/// The exclusion sets are evaluated before descending/hashing: ignored
/// directories are pruned (their contents are never visited), ignored
/// extensions are skipped, and the store's own artifact files are always
/// skipped so the scanner never fingerprints its own state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Directory names to prune during traversal.
    pub ignore_dirs: Vec<String>,
    /// File extensions (with leading dot) to skip.
    pub ignore_exts: Vec<String>,
    /// Where the baseline snapshot is persisted.
    pub baseline_path: PathBuf,
    /// Where detected changes are appended.
    pub audit_log_path: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(ToString::to_string).collect(),
            ignore_exts: DEFAULT_IGNORE_EXTS.iter().map(ToString::to_string).collect(),
            baseline_path: PathBuf::from(DEFAULT_BASELINE_FILE),
            audit_log_path: PathBuf::from(DEFAULT_AUDIT_FILE),
        }
    }
}

impl CheckConfig {
    /// True if a directory with this name must not be descended into.
    #[must_use]
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == name)
    }

    /// True if a file with this name must be skipped: either its extension
    /// is ignored, or it is one of the store's own artifacts.
    #[must_use]
    pub fn is_ignored_file(&self, name: &str) -> bool {
        if self.ignore_exts.iter().any(|ext| name.ends_with(ext.as_str())) {
            return true;
        }
        self.is_artifact(name)
    }

    /// True if this file name matches the baseline or audit trail artifact.
    fn is_artifact(&self, name: &str) -> bool {
        Self::file_name(&self.baseline_path) == Some(name)
            || Self::file_name(&self.audit_log_path) == Some(name)
    }

    fn file_name(path: &Path) -> Option<&str> {
        path.file_name().and_then(|n| n.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_exclusions() {
        let cfg = CheckConfig::default();
        assert!(cfg.is_ignored_dir(".git"));
        assert!(cfg.is_ignored_dir("venv"));
        assert!(!cfg.is_ignored_dir("src"));
        assert!(cfg.is_ignored_file("module.pyc"));
        assert!(cfg.is_ignored_file("debug.log"));
        assert!(!cfg.is_ignored_file("main.rs"));
    }

    #[test]
    fn own_artifacts_are_skipped() {
        let cfg = CheckConfig {
            baseline_path: PathBuf::from("/var/lib/fsentry/baseline.json"),
            audit_log_path: PathBuf::from("/var/log/fsentry/trail.txt"),
            ..CheckConfig::default()
        };
        assert!(cfg.is_ignored_file("baseline.json"));
        assert!(cfg.is_ignored_file("trail.txt"));
        assert!(!cfg.is_ignored_file("hashes.json"));
    }
}
