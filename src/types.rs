//! Shared type aliases and dataset layout constants.

/// Object identifier, stable across every change to the same object.
pub type ObjectId = String;

/// Client identifier, one per transaction subdirectory.
pub type ClientId = String;

/// Logical write time carried by change records. Not wall-clock-guaranteed
/// monotonic; the sole ordering key for last-writer-wins resolution.
pub type LogicalTime = f64;

/// Dataset metadata descriptor at the dataset root.
pub const FILE_NAME_INFO: &str = "info.json";

/// Per-client transaction logs live under this dataset subdirectory.
pub const FOLDER_NAME_TRANSACTIONS: &str = "transactions";

/// Binary asset blobs live under this dataset subdirectory.
pub const FOLDER_NAME_ASSETS: &str = "assets";

/// Transaction and asset files carry this extension from api version 3 on.
pub const FILE_NAME_EXTENSION: &str = ".dat";

/// Maximum number of children per directory level for addressed paths.
pub const BUCKET_SIZE: u64 = 1000;
