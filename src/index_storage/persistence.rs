//! Cache persistence: load the previous snapshot, save the new one with an atomic rename

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::{IndexError, Result};
use crate::models::FileRecord;

pub const APP_DIR_NAME: &str = "ouravocado";
pub const INDEX_FILENAME: &str = "index.json";

/// Default cache file location: `<platform cache dir>/ouravocado/index.json`
///
/// - macOS: `~/Library/Caches/ouravocado/index.json`
/// - Linux: `$XDG_CACHE_HOME/ouravocado/index.json` or `~/.cache/ouravocado/index.json`
/// - Windows: `%LOCALAPPDATA%\ouravocado\index.json`
///
/// The directory is created on first save, not here.
pub fn default_cache_path() -> Result<PathBuf> {
    let cache_base = dirs::cache_dir().ok_or(IndexError::CacheLocation)?;
    Ok(cache_base.join(APP_DIR_NAME).join(INDEX_FILENAME))
}

/// Load the previous snapshot keyed by path
///
/// A missing file yields an empty map silently. An unreadable or malformed file is logged
/// and also yields an empty map, so the run falls back to recomputing everything. When the
/// snapshot lists a path more than once the last entry wins.
pub fn load_cache(path: &Path) -> HashMap<String, FileRecord> {
    match read_snapshot(path) {
        Ok(records) => {
            let mut cache = HashMap::with_capacity(records.len());
            for record in records {
                cache.insert(record.path.clone(), record);
            }
            debug!(path = %path.display(), entries = cache.len(), "loaded cache");
            cache
        }
        Err(e) => {
            error!(error = %e, "ignoring unusable cache, all files will be recomputed");
            HashMap::new()
        }
    }
}

/// Read the raw snapshot; a missing file is an empty snapshot
fn read_snapshot(path: &Path) -> Result<Vec<FileRecord>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(IndexError::CacheLoad { path: path.to_path_buf(), reason: e.to_string() });
        }
    };

    // Older writers emitted `null` for an empty index
    let records: Option<Vec<FileRecord>> = serde_json::from_str(&json)
        .map_err(|e| IndexError::CacheLoad { path: path.to_path_buf(), reason: e.to_string() })?;

    Ok(records.unwrap_or_default())
}

/// Replace the cache file with the given records as 2-space indented JSON
///
/// Parent directories are created as needed. The snapshot is written to a sibling temp
/// file and renamed over the destination.
///
/// # Errors
///
/// Returns [`IndexError::Persist`] if the directory, temp file, or rename fails.
pub fn save_cache(path: &Path, records: &[FileRecord]) -> Result<()> {
    let persist_error =
        |source: std::io::Error| IndexError::Persist { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(persist_error)?;
    }

    let json = serde_json::to_string_pretty(records)?;

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, json).map_err(persist_error)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(persist_error(e));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_else(|| INDEX_FILENAME.into());
    name.push(".tmp");
    path.with_file_name(name)
}
