//! Asset reference resolution
//!
//! Asset-bearing fields hold urls of the shape
//! `scheme://host/<contentId>/<shardIndex>/<rawName>?...`. Splitting on `/`
//! and `?` puts the content id, shard index, and raw name at segment
//! positions 3, 4, and 5 (the scheme, the empty segment between the double
//! slashes, and the host occupy 0..=2). The shard index addresses the blob
//! inside the content directory via the same distributed path scheme the
//! transaction files use.

use crate::addressing::distributed_path;
use crate::types::BUCKET_SIZE;
use unicode_normalization::UnicodeNormalization;

/// A resolved asset reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    /// Content directory under the dataset's assets root
    pub content_id: String,
    /// Sequential index of the blob inside its content directory
    pub shard_index: u64,
    /// Filesystem-safe human-readable name for the exported copy
    pub display_name: String,
    /// Addressed path segments for the blob, `distributed_path(shard_index, 1000)`
    pub path_segments: Vec<String>,
}

/// Parse an asset url into its addressable parts
///
/// Returns `None` for empty urls and for urls with too few segments or a
/// non-numeric shard index; an unresolvable asset is skipped by the caller,
/// never an error.
pub fn parse_asset_url(url: &str) -> Option<AssetRef> {
    if url.is_empty() {
        return None;
    }
    let parts: Vec<&str> = url.split(['/', '?']).collect();
    let content_id = *parts.get(3)?;
    let shard_index: u64 = parts.get(4)?.parse().ok()?;
    let raw_name = *parts.get(5)?;
    if content_id.is_empty() {
        return None;
    }
    Some(AssetRef {
        content_id: content_id.to_string(),
        shard_index,
        display_name: human_readable_file_name(raw_name),
        path_segments: distributed_path(shard_index, BUCKET_SIZE),
    })
}

/// Normalize a raw url segment into a safe, human-readable file name
///
/// Unicode is normalized to NFC; path separators, control characters, and
/// characters reserved on common filesystems are replaced with `-`;
/// leading/trailing dots and whitespace are trimmed.
fn human_readable_file_name(raw: &str) -> String {
    let normalized: String = raw.nfc().collect();
    let cleaned: String = normalized
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim().trim_matches('.');
    if trimmed.is_empty() {
        "unnamed".to_string()
    } else {
        trimmed.to_string()
    }
}
