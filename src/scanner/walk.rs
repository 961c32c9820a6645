use std::path::{Path, PathBuf};

use tracing::{debug, error};
use walkdir::WalkDir;

use crate::error::{IndexError, Result};

/// Enumerate every regular file beneath each root, in root order
///
/// Order within a root is whatever the filesystem yields. Directories and symlinks are
/// not emitted.
///
/// # Errors
///
/// Returns [`IndexError::Traversal`] for the first entry that cannot be read (missing root,
/// permission denied). Roots after the failing one are not scanned.
pub fn scan_directories<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in roots {
        files.extend(scan_directory(root.as_ref())?);
    }
    Ok(files)
}

/// Enumerate every regular file beneath a single root
pub fn scan_directory(root: &Path) -> Result<Vec<PathBuf>> {
    debug!(dir = %root.display(), "processing directory");

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| {
            let path = source.path().unwrap_or(root).to_path_buf();
            error!(path = %path.display(), error = %source, "error walking directory");
            IndexError::Traversal { path, source }
        })?;

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
