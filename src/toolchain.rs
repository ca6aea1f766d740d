//! Cross-toolchain include-path derivation.
//!
//! The project descriptor needs the target sysroot's libc headers and the Qt
//! headers on its include path. The sysroot lives next to the toolchain
//! binary, in a directory whose name carries the target triplet.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::SyncError;

/// Separator the descriptor format uses between include directories.
const INCLUDE_SEPARATOR: &str = ";";

/// Derive the include-path token value from the toolchain and Qt locations.
///
/// Both arguments point at tool binaries; the search starts from their
/// parent directories, matching how the tools are configured.
pub fn derive_include_path(toolchain_path: &Path, qt_path: &Path) -> Result<String, SyncError> {
    let sysroot_include = sysroot_include_dir(toolchain_path)?;
    let qt_include = parent_of(qt_path).join("include");

    Ok(format!(
        "{}{}{}",
        sysroot_include.display(),
        INCLUDE_SEPARATOR,
        qt_include.display()
    ))
}

/// Locate `<triplet>/libc/usr/include` beside the toolchain binary, where
/// `<triplet>` is any directory whose name mentions `linux`.
fn sysroot_include_dir(toolchain_path: &Path) -> Result<PathBuf, SyncError> {
    let root = parent_of(toolchain_path);

    for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("unreadable directory entry"));
            SyncError::missing_input(&root, source)
        })?;

        if !entry.file_name().to_string_lossy().contains("linux") {
            continue;
        }
        let candidate = entry.path().join("libc").join("usr").join("include");
        if candidate.is_dir() {
            tracing::debug!(sysroot = %candidate.display(), "found target sysroot include directory");
            return Ok(candidate);
        }
    }

    Err(SyncError::missing_input(
        &root,
        io::Error::new(
            io::ErrorKind::NotFound,
            "no target sysroot include directory (*linux*/libc/usr/include)",
        ),
    ))
}

fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
