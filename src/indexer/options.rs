use std::path::PathBuf;

/// Extensions indexed when none are configured
pub const DEFAULT_INCLUDE_EXTENSIONS: [&str; 3] = [".md", ".txt", ".org"];

/// Everything one indexing run needs, resolved up front by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    pub roots: Vec<PathBuf>,
    /// Paths containing any of these substrings are skipped
    pub ignore_substrings: Vec<String>,
    pub include_extensions: Vec<String>,
    /// Where the snapshot is read from and written back to
    pub cache_path: PathBuf,
}

impl IndexOptions {
    pub fn new(roots: Vec<PathBuf>, cache_path: PathBuf) -> Self {
        Self {
            roots,
            ignore_substrings: Vec::new(),
            include_extensions: DEFAULT_INCLUDE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            cache_path,
        }
    }

    pub fn with_ignore_substrings(mut self, ignore_substrings: Vec<String>) -> Self {
        self.ignore_substrings = ignore_substrings;
        self
    }

    pub fn with_include_extensions(mut self, include_extensions: Vec<String>) -> Self {
        self.include_extensions = include_extensions;
        self
    }
}
