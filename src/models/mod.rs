//! Data models for the file index.
//!
//! - [`FileRecord`] - one file's metadata as stored in the cache snapshot

pub mod record;

pub use record::FileRecord;
