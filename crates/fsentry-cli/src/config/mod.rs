//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use fsentry_core::CheckConfig;

use crate::output::OutputFormat;

/// CLI configuration, loaded from a TOML file and overridable per-flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Directory names to prune during traversal.
    pub ignore_dirs: Option<Vec<String>>,

    /// File extensions (with leading dot) to skip.
    pub ignore_exts: Option<Vec<String>>,

    /// Baseline storage location.
    pub baseline_path: Option<PathBuf>,

    /// Audit trail location.
    pub audit_log_path: Option<PathBuf>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "fsentry", "fsentry")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Fold file-level settings into the engine defaults. Fields absent
    /// from the file keep the engine's built-in values.
    #[must_use]
    pub fn into_check_config(self) -> CheckConfig {
        let defaults = CheckConfig::default();
        CheckConfig {
            ignore_dirs: self.ignore_dirs.unwrap_or(defaults.ignore_dirs),
            ignore_exts: self.ignore_exts.unwrap_or(defaults.ignore_exts),
            baseline_path: self.baseline_path.unwrap_or(defaults.baseline_path),
            audit_log_path: self.audit_log_path.unwrap_or(defaults.audit_log_path),
        }
    }
}
