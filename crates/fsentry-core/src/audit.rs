//! Append-only audit trail of detected changes.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::diff::ChangeRecord;
use crate::error::{IntegrityError, Result};

/// Timestamp format for audit lines.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends timestamped change records to a line-oriented trail file.
///
/// The trail is create-if-missing and strictly append-only: prior entries
/// are never rewritten, truncated, or reordered.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Create an audit log backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the trail file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as `[<timestamp>] [<KIND>] <path>`.
    ///
    /// # Errors
    ///
    /// Returns `IntegrityError::AuditWrite` if the trail cannot be opened
    /// or appended to.
    pub async fn record(&self, change: &ChangeRecord, at: DateTime<Utc>) -> Result<()> {
        let line = format!("[{}] {}\n", at.format(TIMESTAMP_FORMAT), change);
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.write_error(e))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| self.write_error(e))?;
        file.flush().await.map_err(|e| self.write_error(e))?;
        Ok(())
    }

    /// Append every record, timestamped now. Best-effort: failures are
    /// logged and counted but never abort the caller -- the trail is
    /// advisory relative to the baseline's correctness.
    ///
    /// Returns the number of records that could not be written.
    pub async fn record_all(&self, changes: &[ChangeRecord]) -> usize {
        let mut failures = 0;
        for change in changes {
            if let Err(e) = self.record(change, Utc::now()).await {
                warn!(path = %self.path.display(), error = %e, "audit append failed");
                failures += 1;
            }
        }
        failures
    }

    fn write_error(&self, source: std::io::Error) -> IntegrityError {
        IntegrityError::AuditWrite {
            path: self.path.display().to_string(),
            source,
        }
    }
}
