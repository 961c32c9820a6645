//! Directory scanning and path filtering
//!
//! [`scan_directories`] walks the roots and returns every regular file. The result is then
//! narrowed by [`filter_ignored`] (raw substring exclusion) and [`filter_by_extensions`]
//! (case-insensitive extension inclusion). Both filters are pure and keep input order.

pub mod filter;
pub mod walk;

pub use filter::{filter_by_extensions, filter_ignored, normalize_extension, should_ignore_path};
pub use walk::{scan_directories, scan_directory};
