//! Idempotent artifact commits.
//!
//! Rendered artifacts are staged as temporary files in the target directory
//! and promoted by atomic rename only when their bytes differ from what is
//! already on disk. Unchanged drafts are discarded, which keeps modification
//! timestamps stable and spares the IDE needless cache invalidation. Staged
//! temporaries are cleaned up on every exit path, including errors.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::SyncError;

/// What `commit` did with a staged artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The target was absent or differed; the draft was promoted.
    Updated,
    /// The target already had identical bytes; the draft was discarded.
    Unchanged,
}

/// A rendered artifact waiting in the target's directory.
///
/// Staging next to the target keeps the final rename on one filesystem, so
/// a concurrently running IDE never observes a half-written descriptor.
#[derive(Debug)]
pub struct StagedArtifact {
    staged: NamedTempFile,
    target: PathBuf,
}

/// Write `contents` to a temporary file beside `target`.
pub fn stage(target: &Path, contents: &str) -> Result<StagedArtifact, SyncError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| SyncError::write_failure(target, e))?;

    let mut staged =
        NamedTempFile::new_in(dir).map_err(|e| SyncError::write_failure(target, e))?;
    staged
        .write_all(contents.as_bytes())
        .map_err(|e| SyncError::write_failure(target, e))?;

    Ok(StagedArtifact {
        staged,
        target: target.to_path_buf(),
    })
}

impl StagedArtifact {
    pub fn target(&self) -> &Path {
        &self.target
    }

    fn differs(&self) -> Result<bool, SyncError> {
        if !self.target.exists() {
            return Ok(true);
        }
        let current =
            fs::read(&self.target).map_err(|e| SyncError::write_failure(&self.target, e))?;
        let draft =
            fs::read(self.staged.path()).map_err(|e| SyncError::write_failure(&self.target, e))?;
        Ok(current != draft)
    }

    /// Report what a commit would do without touching the target.
    pub fn preview(&self) -> Result<CommitOutcome, SyncError> {
        Ok(if self.differs()? {
            CommitOutcome::Updated
        } else {
            CommitOutcome::Unchanged
        })
    }

    /// Promote the draft if the target is absent or differs, else drop it.
    pub fn commit(self) -> Result<CommitOutcome, SyncError> {
        if self.differs()? {
            self.promote()?;
            Ok(CommitOutcome::Updated)
        } else {
            Ok(CommitOutcome::Unchanged)
        }
    }

    fn promote(self) -> Result<(), SyncError> {
        self.staged
            .persist(&self.target)
            .map_err(|e| SyncError::write_failure(&self.target, e.error))?;
        Ok(())
    }
}

/// Commit a primary artifact together with sidecars that must move with it.
///
/// The primary's byte comparison decides for the whole group: the project
/// descriptor and its filter sidecar are either both replaced or both
/// discarded, never split.
pub fn commit_group(
    primary: StagedArtifact,
    sidecars: Vec<StagedArtifact>,
) -> Result<CommitOutcome, SyncError> {
    if primary.differs()? {
        primary.promote()?;
        for sidecar in sidecars {
            sidecar.promote()?;
        }
        Ok(CommitOutcome::Updated)
    } else {
        Ok(CommitOutcome::Unchanged)
    }
}
