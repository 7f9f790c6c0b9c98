//! Distributed file addressing
//!
//! Maps a sequential index to an ordered list of path segments so that no
//! directory level accumulates more than `bucket_size` children. The final
//! segment is the decimal index itself; the segments before it are the
//! base-`bucket_size` digits of `index / bucket_size`, most significant
//! first. Depth therefore grows logarithmically with the index:
//!
//! ```text
//! distributed_path(0, 1000)         == ["0"]
//! distributed_path(999, 1000)       == ["999"]
//! distributed_path(1000, 1000)      == ["1", "1000"]
//! distributed_path(1_000_000, 1000) == ["1", "0", "1000000"]
//! ```
//!
//! Used both for transaction frames (indexed per client) and asset blobs
//! (indexed per content id). Pure and total for every `index`; callers
//! must pass `bucket_size > 0`.

/// Compute the addressed path segments for a sequential index
pub fn distributed_path(index: u64, bucket_size: u64) -> Vec<String> {
    debug_assert!(bucket_size > 0, "bucket_size must be positive");

    let mut segments = Vec::new();
    let mut level = index / bucket_size;
    while level > 0 {
        segments.insert(0, (level % bucket_size).to_string());
        level /= bucket_size;
    }
    segments.push(index.to_string());
    segments
}
