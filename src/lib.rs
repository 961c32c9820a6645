//! Ouravocado - incremental metadata index for text files
//!
//! Walks one or more directories, keeps the text-like files, and records per-file
//! metadata (size, word count, content checksum) in a JSON cache. Files already present
//! in the cache are reused on later runs instead of being re-read.
//!
//! - Scanning and substring/extension filtering ([`scanner`])
//! - Per-file metrics ([`extractor`])
//! - Loading and saving the JSON snapshot ([`index_storage`])
//! - The end-to-end run ([`indexer`])
//!
//! # Example
//!
//! ```no_run
//! use ouravocado::{IndexOptions, default_cache_path, index_directories};
//!
//! let options = IndexOptions::new(vec!["/Users/alice/notes".into()], default_cache_path()?)
//!     .with_ignore_substrings(vec![".git".to_string()]);
//! let summary = index_directories(&options)?;
//! println!("Indexed {} files", summary.records.len());
//! # Ok::<(), ouravocado::IndexError>(())
//! ```

pub mod cli;
pub mod error;
pub mod extractor;
pub mod index_storage;
pub mod indexer;
pub mod logging;
pub mod models;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use error::IndexError;
pub use extractor::extract_record;
pub use index_storage::{default_cache_path, load_cache, save_cache};
pub use indexer::{IndexOptions, IndexSummary, index_directories};
pub use models::FileRecord;
pub use utils::format_size;
