//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use ouravocado::FileRecord;
use tempfile::TempDir;

/// Builder for a temp workspace holding a `notes/` tree and a separate cache file
pub struct NotesDirBuilder {
    temp_dir: TempDir,
}

impl NotesDirBuilder {
    /// Create a new builder with an empty notes directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("notes")).expect("Failed to create notes dir");
        Self { temp_dir }
    }

    /// Add a file (parent directories are created) relative to the notes root
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join("notes").join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Add an empty directory relative to the notes root
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join("notes").join(relative))
            .expect("Failed to create dir");
        self
    }

    /// Build and return the workspace (consumes self)
    pub fn build(self) -> Workspace {
        Workspace { temp_dir: self.temp_dir }
    }
}

impl Default for NotesDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built workspace; removed from disk on drop
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn notes(&self) -> PathBuf {
        self.temp_dir.path().join("notes")
    }

    pub fn note(&self, relative: &str) -> PathBuf {
        self.notes().join(relative)
    }

    pub fn cache_path(&self) -> PathBuf {
        self.temp_dir.path().join("cache").join("index.json")
    }

    /// Parse the cache file into records, in file order
    pub fn read_records(&self) -> Vec<FileRecord> {
        let json = fs::read_to_string(self.cache_path()).expect("Failed to read cache file");
        serde_json::from_str(&json).expect("Cache file should be a JSON array of records")
    }

    pub fn read_cache_text(&self) -> String {
        fs::read_to_string(self.cache_path()).expect("Failed to read cache file")
    }
}

/// Record with placeholder metrics for seeding a cache file
pub fn seeded_record(path: &Path, word_count: u64) -> FileRecord {
    FileRecord {
        path: path.to_string_lossy().to_string(),
        word_count,
        size: 3,
        size_friendly: "3.00 B".to_string(),
        checksum: "feedfacefeedface".to_string(),
    }
}
