use serde::{Deserialize, Serialize};

/// Persisted metadata for one indexed file
///
/// Field names on disk are camelCase (`wordCount`, `sizeFriendly`, `fastChecksum`) so the
/// cache file stays readable by other consumers of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub path: String,
    pub word_count: u64,
    pub size: u64,
    /// Display-only rendering of `size`; never read back as a source of truth
    pub size_friendly: String,
    #[serde(rename = "fastChecksum")]
    pub checksum: String,
}
