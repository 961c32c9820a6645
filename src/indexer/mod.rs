//! Indexing orchestration
//!
//! [`index_directories`] composes the scanner, the filters, the extractor and the cache
//! store into one synchronous pass. Extraction of cache misses is spread over the rayon
//! pool; every cache insert happens back on the calling thread.

pub mod builder;
pub mod options;

pub use builder::{IndexStats, IndexSummary, index_directories, resolve_records};
pub use options::{DEFAULT_INCLUDE_EXTENSIONS, IndexOptions};
