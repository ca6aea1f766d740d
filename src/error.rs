//! Error taxonomy for the synchronization pipeline.
//!
//! Every failure surfaces to the invoker immediately; no partially rendered
//! descriptor is ever committed to disk.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// A required input file cannot be opened and no fallback exists.
    #[error("cannot open {}: {}", .path.display(), .source)]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template placeholder has no bound value.
    #[error("unresolved placeholder {placeholder} in {template}")]
    UnresolvedToken {
        placeholder: String,
        template: String,
    },

    /// A descriptor file lacks an expected marker line.
    #[error("malformed document {}: {}", .path.display(), .reason)]
    MalformedDocument { path: PathBuf, reason: String },

    /// A staged artifact cannot be created, written, or promoted into place.
    #[error("cannot write {}: {}", .path.display(), .source)]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    pub fn missing_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MissingInput {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}
