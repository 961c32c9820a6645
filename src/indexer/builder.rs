//! Index builder: scan, filter, reuse or recompute, persist.
//!
//! # Cache reuse
//!
//! A file is a cache hit when the loaded snapshot has an entry for the exact same path
//! string. Hits are reused verbatim: the file is not re-read, re-hashed, or stat'ed, so a
//! file edited since the last run keeps its old record until its entry is dropped from
//! the cache.
//!
//! # Error Handling Strategy
//!
//! - **Traversal errors** abort the run before anything is written.
//! - **Per-file extraction errors** are logged and the file is left out of the index.
//! - **Cache load errors** degrade to an empty cache (full recompute).
//! - **Persist errors** abort the run; the previous cache file is left untouched.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::extractor::extract_record;
use crate::index_storage::{load_cache, save_cache};
use crate::indexer::options::IndexOptions;
use crate::models::FileRecord;
use crate::scanner::{filter_by_extensions, filter_ignored, scan_directories};
use crate::utils::{format_path_with_tilde, path_key};

/// Counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Records reused from the loaded cache
    pub reused: usize,
    /// Records freshly extracted this run
    pub computed: usize,
    /// Files that could not be read and were left out
    pub skipped: usize,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub cache_path: PathBuf,
    pub records: Vec<FileRecord>,
    pub stats: IndexStats,
}

/// Build an up-to-date index for the configured roots and persist it
///
/// # Errors
///
/// Returns an error if any root cannot be walked ([`crate::IndexError::Traversal`]) or the
/// snapshot cannot be written ([`crate::IndexError::Persist`]). Unreadable individual files
/// and an unusable previous cache are logged and do not fail the run.
///
/// # Examples
///
/// ```no_run
/// use ouravocado::indexer::{IndexOptions, index_directories};
///
/// let options = IndexOptions::new(vec!["notes".into()], "/tmp/index.json".into());
/// let summary = index_directories(&options)?;
/// println!("Updated {}", summary.cache_path.display());
/// # Ok::<(), ouravocado::IndexError>(())
/// ```
pub fn index_directories(options: &IndexOptions) -> Result<IndexSummary> {
    let mut cache = load_cache(&options.cache_path);

    for root in &options.roots {
        debug!(root = %format_path_with_tilde(root), "scanning");
    }
    let files = scan_directories(&options.roots)?;
    let scanned = files.len();

    let files = filter_ignored(files, &options.ignore_substrings);
    let files = filter_by_extensions(files, &options.include_extensions);
    debug!(scanned, selected = files.len(), "filtered paths");

    let (records, stats) = resolve_records(files, &mut cache);

    save_cache(&options.cache_path, &records)?;

    info!(
        records = records.len(),
        reused = stats.reused,
        computed = stats.computed,
        skipped = stats.skipped,
        "indexed files"
    );

    Ok(IndexSummary { cache_path: options.cache_path.clone(), records, stats })
}

/// Produce one record per distinct path, reusing cache entries and extracting the rest
///
/// New records are inserted into `cache`. The result follows the order of `files`; a path
/// that appears twice keeps its first position.
pub fn resolve_records(
    files: Vec<PathBuf>,
    cache: &mut HashMap<String, FileRecord>,
) -> (Vec<FileRecord>, IndexStats) {
    let mut seen = HashSet::with_capacity(files.len());
    let keyed: Vec<(String, PathBuf)> = files
        .into_iter()
        .map(|path| (path_key(&path), path))
        .filter(|(key, _)| seen.insert(key.clone()))
        .collect();

    let mut stats = IndexStats::default();

    let misses: Vec<&(String, PathBuf)> =
        keyed.iter().filter(|(key, _)| !cache.contains_key(key)).collect();
    stats.reused = keyed.len() - misses.len();

    let extracted: Vec<(&str, &Path, Result<FileRecord>)> = misses
        .par_iter()
        .map(|(key, path)| (key.as_str(), path.as_path(), extract_record(path)))
        .collect();

    for (key, path, result) in extracted {
        match result {
            Ok(record) => {
                cache.insert(key.to_string(), record);
                stats.computed += 1;
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "error generating file info");
                stats.skipped += 1;
            }
        }
    }

    let records = keyed
        .iter()
        .filter_map(|(key, _)| {
            let record = cache.get(key)?;
            Some(record.clone())
        })
        .collect();

    (records, stats)
}
