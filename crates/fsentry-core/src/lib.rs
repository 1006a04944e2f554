//! # fsentry-core
//!
//! File integrity scanning engine. Fingerprints every file under a root
//! directory with streaming SHA-256, compares against a persisted
//! baseline, and classifies every difference as new, modified, or
//! deleted.
//!
//! ## Data Flow
//!
//! ```text
//! run_check(root, config)
//!   scan_tree()            walk + hash -> new Snapshot
//!   BaselineStore::load()  persisted baseline (missing/corrupt -> empty)
//!   diff_snapshots()       classify New / Modified / Deleted
//!   AuditLog::record_all() append trail entries (best effort)
//!   BaselineStore::save()  atomically replace the baseline
//!   -> CheckReport
//! ```
//!
//! The engine is pure relative to its caller: given a root path and the
//! prior baseline it returns the new snapshot plus an ordered change
//! list; rendering is entirely the caller's concern. Concurrent checks
//! against the same baseline file are not safe and must be serialized by
//! the caller.

pub mod audit;
pub mod config;
pub mod diff;
pub mod error;
pub mod hash;
pub mod scan;
pub mod snapshot;
pub mod store;

pub use audit::AuditLog;
pub use config::CheckConfig;
pub use diff::{diff_snapshots, ChangeKind, ChangeRecord};
pub use error::{IntegrityError, Result};
pub use scan::scan_tree;
pub use snapshot::Snapshot;
pub use store::{BaselineStore, BaselineStatus};

use std::path::Path;
use tracing::info;

/// Outcome of one full integrity check.
#[derive(Debug)]
pub struct CheckReport {
    /// Classified changes, new/modified first then deleted, each in
    /// lexical path order
    pub changes: Vec<ChangeRecord>,
    /// Number of files fingerprinted in this run
    pub files_scanned: usize,
    /// How the prior baseline loaded
    pub baseline_status: BaselineStatus,
    /// Set if the new baseline could not be persisted; the change list
    /// is still valid, but the next run will compare against the stale
    /// baseline
    pub baseline_error: Option<IntegrityError>,
    /// Number of audit trail entries that could not be appended
    pub audit_failures: usize,
}

impl CheckReport {
    /// True if no differences were detected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Run a full integrity check: scan, diff against the stored baseline,
/// append the audit trail, and replace the baseline.
///
/// Only an invalid root aborts the check. Unreadable files are skipped,
/// a corrupt baseline degrades to empty, audit failures are counted, and
/// a baseline write failure is carried in the report alongside the still
/// valid change list.
///
/// # Errors
///
/// Returns `IntegrityError::NotADirectory` if `root` does not exist or
/// is not a directory.
pub async fn run_check(root: &Path, config: &CheckConfig) -> Result<CheckReport> {
    let new = scan_tree(root, config).await?;

    let store = BaselineStore::new(&config.baseline_path);
    let (old, baseline_status) = store.load();

    let changes = diff_snapshots(&old, &new);
    info!(
        scanned = new.len(),
        changes = changes.len(),
        "integrity check complete"
    );

    let audit_failures = AuditLog::new(&config.audit_log_path)
        .record_all(&changes)
        .await;

    let baseline_error = store.save(&new).await.err();

    Ok(CheckReport {
        changes,
        files_scanned: new.len(),
        baseline_status,
        baseline_error,
        audit_failures,
    })
}

/// Scan and diff without touching the baseline or the audit trail.
///
/// Useful for previewing what a check would report.
///
/// # Errors
///
/// Returns `IntegrityError::NotADirectory` if `root` does not exist or
/// is not a directory.
pub async fn preview_check(root: &Path, config: &CheckConfig) -> Result<CheckReport> {
    let new = scan_tree(root, config).await?;
    let (old, baseline_status) = BaselineStore::new(&config.baseline_path).load();
    let changes = diff_snapshots(&old, &new);

    Ok(CheckReport {
        files_scanned: new.len(),
        changes,
        baseline_status,
        baseline_error: None,
        audit_failures: 0,
    })
}
