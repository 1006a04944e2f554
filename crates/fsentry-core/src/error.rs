use thiserror::Error;

/// Result type alias for integrity operations
pub type Result<T> = std::result::Result<T, IntegrityError>;

/// Errors that can occur while scanning, diffing, or persisting state
#[derive(Error, Debug)]
pub enum IntegrityError {
    /// Scan root does not exist or is not a directory
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending root path
        path: String,
    },

    /// I/O failure with path context
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Baseline could not be written; the next run will compare
    /// against the stale baseline
    #[error("failed to write baseline {path}: {source}")]
    BaselineWrite {
        /// Baseline storage location
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Audit trail could not be appended to (best-effort, non-fatal)
    #[error("failed to append to audit trail {path}: {source}")]
    AuditWrite {
        /// Audit trail location
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl IntegrityError {
    /// Build an `Io` error with path context.
    pub fn io(path: &str, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    /// Returns true if the error leaves the computed diff intact
    /// (persistence failed but the scan/diff result is still valid).
    #[must_use]
    pub const fn is_persistence_error(&self) -> bool {
        matches!(self, Self::BaselineWrite { .. } | Self::AuditWrite { .. })
    }
}
