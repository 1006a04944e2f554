//! Check command implementation -- full integrity run.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use fsentry_core::{run_check, BaselineStatus, ChangeKind, ChangeRecord, CheckReport};

use crate::cli::args::CheckArgs;
use crate::config::Config;
use crate::output::OutputFormat;

use super::{resolve_config, Context};

/// Execute the check command.
pub async fn execute(ctx: Context, file_config: Config, args: CheckArgs) -> Result<()> {
    let config = resolve_config(file_config, &args);
    let report = run_check(&args.path, &config).await?;

    render_report(ctx, &report, false)?;
    Ok(())
}

/// JSON projection of a check report.
#[derive(Serialize)]
struct JsonReport<'a> {
    changes: &'a [ChangeRecord],
    files_scanned: usize,
    baseline_status: BaselineStatus,
    baseline_saved: bool,
    audit_failures: usize,
}

/// Render a report in the selected output format. Shared with `scan`,
/// which sets `dry_run` to suppress persistence warnings.
pub fn render_report(ctx: Context, report: &CheckReport, dry_run: bool) -> Result<()> {
    if matches!(ctx.output_format, OutputFormat::Json) {
        let json = JsonReport {
            changes: &report.changes,
            files_scanned: report.files_scanned,
            baseline_status: report.baseline_status,
            baseline_saved: !dry_run && report.baseline_error.is_none(),
            audit_failures: report.audit_failures,
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    // Informational, never failures
    match report.baseline_status {
        BaselineStatus::Missing => {
            println!(
                "{}",
                "  No baseline found; every file will be reported as new.".dimmed()
            );
        }
        BaselineStatus::Corrupt => {
            println!(
                "{}",
                "  Baseline was unreadable and has been treated as empty.".yellow()
            );
        }
        BaselineStatus::Loaded => {}
    }

    if report.is_clean() {
        println!("  {}", "No changes detected.".bright_green());
    } else {
        for change in &report.changes {
            let label = match change.kind {
                ChangeKind::New => "[NEW FILE]".bright_green(),
                ChangeKind::Modified => "[MODIFIED]".bright_yellow(),
                ChangeKind::Deleted => "[DELETED]".bright_red(),
            };
            println!("  {label} {}", change.path);
        }
    }

    println!();
    println!(
        "  {} files scanned, {} changes",
        report.files_scanned.to_string().bright_white(),
        report.changes.len().to_string().bright_white()
    );

    if !dry_run {
        if let Some(err) = &report.baseline_error {
            eprintln!(
                "  {} {err}",
                "warning: baseline not updated; the next run will compare against the stale baseline:"
                    .bright_red()
            );
        }
        if report.audit_failures > 0 {
            eprintln!(
                "  {} {} entries could not be appended to the audit trail",
                "warning:".bright_yellow(),
                report.audit_failures
            );
        }
    }

    Ok(())
}
