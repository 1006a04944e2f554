//! Snapshot comparison -- classify every path as New, Modified, or Deleted.

use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;

/// Classification of a single path between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Present in the new snapshot only
    New,
    /// Present in both with differing digests
    Modified,
    /// Present in the old snapshot only
    Deleted,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "NEW FILE"),
            Self::Modified => write!(f, "MODIFIED"),
            Self::Deleted => write!(f, "DELETED"),
        }
    }
}

/// One classified change detected between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// What happened to the path
    pub kind: ChangeKind,
    /// The affected path
    pub path: String,
}

impl ChangeRecord {
    fn new(kind: ChangeKind, path: &str) -> Self {
        Self {
            kind,
            path: path.to_string(),
        }
    }
}

impl std::fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.path)
    }
}

/// Compare two snapshots and classify every differing path.
///
/// New and modified paths are emitted first (lexical path order), then
/// deleted paths (lexical order). Unchanged paths produce no record, and
/// each path appears at most once. The ordering carries no meaning but is
/// deterministic for a given pair of inputs.
#[must_use]
pub fn diff_snapshots(old: &Snapshot, new: &Snapshot) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();

    for (path, digest) in new.iter() {
        match old.digest(path) {
            None => changes.push(ChangeRecord::new(ChangeKind::New, path)),
            Some(prior) if prior != digest => {
                changes.push(ChangeRecord::new(ChangeKind::Modified, path));
            }
            Some(_) => {}
        }
    }

    for path in old.paths() {
        if !new.contains(path) {
            changes.push(ChangeRecord::new(ChangeKind::Deleted, path));
        }
    }

    changes
}
