//! Baseline persistence -- load and atomically replace the stored snapshot.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{IntegrityError, Result};
use crate::snapshot::Snapshot;

/// Outcome of loading the persisted baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineStatus {
    /// Baseline parsed successfully
    Loaded,
    /// No baseline existed yet (first run)
    Missing,
    /// Baseline existed but was unreadable or malformed; treated as empty
    Corrupt,
}

/// Stores exactly one "current" baseline snapshot at a fixed location.
///
/// The persisted form is pretty-printed JSON with keys in lexical order,
/// so the baseline stays human-inspectable.
#[derive(Debug, Clone)]
pub struct BaselineStore {
    path: PathBuf,
}

impl BaselineStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage location of the baseline file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted baseline.
    ///
    /// A missing file yields an empty snapshot (first run). A corrupt or
    /// unreadable file also yields an empty snapshot: a damaged baseline
    /// must never block future scans, at the cost of re-flagging every
    /// file as new on the next run.
    #[must_use]
    pub fn load(&self) -> (Snapshot, BaselineStatus) {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no baseline yet");
                return (Snapshot::new(), BaselineStatus::Missing);
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "baseline unreadable, treating as empty");
                return (Snapshot::new(), BaselineStatus::Corrupt);
            }
        };

        match serde_json::from_str(&content) {
            Ok(snapshot) => (snapshot, BaselineStatus::Loaded),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "baseline malformed, treating as empty");
                (Snapshot::new(), BaselineStatus::Corrupt)
            }
        }
    }

    /// Persist a snapshot, fully replacing any prior baseline.
    ///
    /// Writes to a sibling temp file and renames it into place so the
    /// baseline is replaced atomically; a crash mid-save leaves the old
    /// baseline intact.
    ///
    /// # Errors
    ///
    /// Returns `IntegrityError::BaselineWrite` if the storage medium is
    /// unwritable. The caller must surface this rather than silently
    /// losing the new baseline.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let path_str = self.path.display().to_string();

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json.as_bytes())
            .await
            .map_err(|e| IntegrityError::BaselineWrite {
                path: path_str.clone(),
                source: e,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| IntegrityError::BaselineWrite {
                path: path_str,
                source: e,
            })?;

        debug!(path = %self.path.display(), entries = snapshot.len(), "baseline saved");
        Ok(())
    }
}
