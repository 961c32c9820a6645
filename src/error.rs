//! Error taxonomy for indexing runs
//!
//! Only [`IndexError::Traversal`], [`IndexError::Persist`], [`IndexError::Serialize`] and
//! [`IndexError::CacheLocation`] stop a run. Extraction and cache-load failures are logged
//! by the orchestrator and the run continues.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// A directory under one of the roots could not be walked
    #[error("Failed to scan {}: {source}", path.display())]
    Traversal { path: PathBuf, source: walkdir::Error },

    /// A single file could not be measured
    #[error("Failed to read {}: {source}", path.display())]
    Extraction { path: PathBuf, source: io::Error },

    /// The previous cache snapshot was unreadable or malformed
    #[error("Failed to load cache {}: {reason}", path.display())]
    CacheLoad { path: PathBuf, reason: String },

    /// The new cache snapshot could not be written
    #[error("Failed to write cache {}: {source}", path.display())]
    Persist { path: PathBuf, source: io::Error },

    #[error("Failed to serialize cache: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No platform cache directory available")]
    CacheLocation,
}

pub type Result<T, E = IndexError> = std::result::Result<T, E>;
