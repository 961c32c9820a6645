//! Per-file metrics: size, content checksum, word count
//!
//! Each metric is read independently. Any I/O failure aborts the record for that file
//! only; callers decide whether to skip it.

pub mod checksum;
pub mod words;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IndexError, Result};
use crate::models::FileRecord;
use crate::utils::{format_size, path_key};

pub use checksum::file_checksum;
pub use words::{WORD_CHUNK_SIZE, count_words};

/// Measure a file and build its [`FileRecord`]
///
/// # Errors
///
/// Returns [`IndexError::Extraction`] if the file vanished, is unreadable, or a read fails
/// part way through.
pub fn extract_record(path: &Path) -> Result<FileRecord> {
    let to_error =
        |source: std::io::Error| IndexError::Extraction { path: path.to_path_buf(), source };

    let size = fs::metadata(path).map_err(to_error)?.len();
    let checksum = file_checksum(path).map_err(to_error)?;

    debug!(path = %path.display(), "calculating word count");
    let word_count = count_words(path).map_err(to_error)?;
    debug!(path = %path.display(), count = word_count, "word count");

    Ok(FileRecord {
        path: path_key(path),
        word_count,
        size,
        size_friendly: format_size(size),
        checksum,
    })
}
