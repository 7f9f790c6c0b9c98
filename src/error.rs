//! Error types for transaction replay and export.

use crate::types::{ClientId, ObjectId};
use std::path::PathBuf;
use thiserror::Error;

/// Frame decoding errors
///
/// Any of these marks the frame as corrupt or tampered. Decoding is
/// all-or-nothing: a frame that fails one of these checks yields no
/// change records at all.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Frame header malformed: {0}")]
    HeaderMalformed(String),

    #[error("Frame size mismatch: header declares {declared} bytes, content has {actual}")]
    SizeMismatch { declared: u64, actual: u64 },

    #[error("Frame checksum mismatch: header declares {declared}, content digests to {computed}")]
    ChecksumMismatch { declared: String, computed: String },

    #[error("Frame content is not valid UTF-8: {0}")]
    ContentNotText(String),

    #[error("Frame content malformed at line {line}: {reason}")]
    ContentMalformed { line: usize, reason: String },
}

/// Merge engine errors
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Field name {field:?} on object {id:?} uses the reserved history suffix")]
    InvalidFieldName { id: ObjectId, field: String },
}

/// Export run errors
///
/// Everything here is fatal for the whole run; recoverable conditions
/// (a client's sequence ending, an asset failing to copy) never surface
/// as an `ExportError`.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Dataset metadata not found: {0}")]
    InfoNotFound(PathBuf),

    #[error("Dataset metadata malformed: {0}")]
    InfoMalformed(String),

    #[error("Transaction {index} from client {client:?}: {source}")]
    FrameInvalid {
        client: ClientId,
        index: u64,
        #[source]
        source: FrameError,
    },

    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
