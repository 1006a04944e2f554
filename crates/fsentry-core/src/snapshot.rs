//! Snapshot -- point-in-time path-to-digest mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete mapping from absolute file path to content digest, captured
/// in a single traversal.
///
/// Backed by a `BTreeMap` so iteration (and the persisted JSON) is always
/// in lexical path order. A snapshot is never mutated after the scan that
/// produced it; each run builds a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    files: BTreeMap<String, String>,
}

impl Snapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }

    /// Record a digest for a path.
    pub fn insert(&mut self, path: impl Into<String>, digest: impl Into<String>) {
        self.files.insert(path.into(), digest.into());
    }

    /// Digest recorded for a path, if any.
    #[must_use]
    pub fn digest(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Whether a path is present.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Number of fingerprinted files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if no files were fingerprinted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate `(path, digest)` pairs in lexical path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, d)| (p.as_str(), d.as_str()))
    }

    /// Iterate paths in lexical order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
