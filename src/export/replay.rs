//! Per-client transaction replay
//!
//! Each client's frames form a contiguous sequence starting at index 0;
//! the first missing file ends that client's replay. Any other read or
//! decode failure is fatal for the whole run.

use super::addressed_file;
use crate::addressing::distributed_path;
use crate::error::ExportError;
use crate::frame::decode_frame;
use crate::merge::{apply_change, Store};
use crate::types::{ClientId, BUCKET_SIZE};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// List non-hidden client subdirectories, sorted lexicographically
pub(crate) fn list_clients(transactions_root: &Path) -> Result<Vec<ClientId>, ExportError> {
    if !transactions_root.is_dir() {
        return Ok(Vec::new());
    }
    let mut clients = Vec::new();
    for entry in WalkDir::new(transactions_root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ExportError::Io(e.into()))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if entry.file_type().is_dir() && !name.starts_with('.') {
            clients.push(name);
        }
    }
    clients.sort();
    Ok(clients)
}

/// Replay one client's frames into the shared store, returning the number
/// of frames applied
pub(crate) fn replay_client(
    store: &mut Store,
    transactions_root: &Path,
    client: &str,
    ext: &str,
) -> Result<u64, ExportError> {
    let client_root = transactions_root.join(client);
    let mut index: u64 = 0;
    loop {
        let path = addressed_file(&client_root, &distributed_path(index, BUCKET_SIZE), ext);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            // End of this client's sequence, expected
            Err(e) if e.kind() == ErrorKind::NotFound => break,
            Err(e) => return Err(e.into()),
        };

        let frame = decode_frame(&bytes).map_err(|source| ExportError::FrameInvalid {
            client: client.to_string(),
            index,
            source,
        })?;
        debug!(
            client,
            index,
            changes = frame.changes.len(),
            "applying frame"
        );
        for change in &frame.changes {
            apply_change(store, change)?;
        }
        index += 1;
    }
    Ok(index)
}
