//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// File integrity checker
///
/// Fingerprints every file under a directory with SHA-256, compares the
/// result against the stored baseline, and reports every new, modified,
/// or deleted file. Detected changes are appended to an audit trail.
#[derive(Parser, Debug)]
#[command(name = "fsentry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an integrity check: scan, diff, log changes, update the baseline
    Check(CheckArgs),

    /// Preview a check without writing the baseline or the audit trail
    Scan(CheckArgs),
}

/// Arguments shared by `check` and `scan`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Root directory to scan
    pub path: PathBuf,

    /// Baseline storage file (default: hashes.json)
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Audit trail file (default: integrity_log.txt)
    #[arg(long)]
    pub audit_log: Option<PathBuf>,

    /// Additional directory name to ignore (repeatable)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    pub ignore_dirs: Vec<String>,

    /// Additional file extension to ignore, with leading dot (repeatable)
    #[arg(long = "ignore-ext", value_name = "EXT")]
    pub ignore_exts: Vec<String>,
}
