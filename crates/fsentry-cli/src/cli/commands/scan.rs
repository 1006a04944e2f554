//! Scan command implementation -- dry run, no state written.

use anyhow::Result;

use fsentry_core::preview_check;

use crate::cli::args::CheckArgs;
use crate::config::Config;

use super::check::render_report;
use super::{resolve_config, Context};

/// Execute the scan command: report what a check would find without
/// touching the baseline or the audit trail.
pub async fn execute(ctx: Context, file_config: Config, args: CheckArgs) -> Result<()> {
    let config = resolve_config(file_config, &args);
    let report = preview_check(&args.path, &config).await?;

    render_report(ctx, &report, true)?;
    Ok(())
}
