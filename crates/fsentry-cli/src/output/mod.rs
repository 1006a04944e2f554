//! Output format selection.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Available output formats. Selectable per-invocation with `--output`
/// or as a default in the config file.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored human-readable output
    #[default]
    Pretty,
    /// JSON output
    Json,
}
