//! Persistent index storage
//!
//! The whole index lives in one JSON array file (`index.json`). It is read once at the
//! start of a run and replaced wholesale at the end. Concurrent runs against the same file
//! are not coordinated.
//!
//! Default location: platform-specific cache directories
//! - macOS: `~/Library/Caches/ouravocado/`
//! - Linux: `~/.cache/ouravocado/`
//! - Windows: `%LOCALAPPDATA%\ouravocado\`

pub mod persistence;

pub use persistence::{default_cache_path, load_cache, save_cache};
