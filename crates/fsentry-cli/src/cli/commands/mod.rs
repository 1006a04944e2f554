//! Command implementations.

pub mod check;
pub mod scan;

use fsentry_core::CheckConfig;

use crate::cli::args::CheckArgs;
use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context passed to every command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Selected output format
    pub output_format: OutputFormat,
}

/// Build the engine config from file-level settings plus CLI overrides.
/// Repeatable ignore flags extend the configured sets; path flags replace
/// the configured locations.
#[must_use]
pub fn resolve_config(file_config: Config, args: &CheckArgs) -> CheckConfig {
    let mut config = file_config.into_check_config();

    config.ignore_dirs.extend(args.ignore_dirs.iter().cloned());
    config.ignore_exts.extend(args.ignore_exts.iter().cloned());
    if let Some(baseline) = &args.baseline {
        config.baseline_path.clone_from(baseline);
    }
    if let Some(audit_log) = &args.audit_log {
        config.audit_log_path.clone_from(audit_log);
    }

    config
}
