//! Replay driver and export projection
//!
//! Replays every client's contiguous transaction sequence through the
//! frame decoder into one shared store, then projects the materialized
//! objects and their referenced assets onto a plain file tree.

mod project;
mod replay;

pub use project::ASSET_FIELDS;

use crate::error::ExportError;
use crate::merge::Store;
use crate::types::{FILE_NAME_EXTENSION, FILE_NAME_INFO, FOLDER_NAME_TRANSACTIONS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dataset metadata descriptor, read from `info.json` at the dataset root
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetInfo {
    #[serde(rename = "apiVersion")]
    pub api_version: i64,
}

impl DatasetInfo {
    /// Load the descriptor, fatal before any replay begins if it is
    /// missing or unreadable
    pub fn load(dataset_root: &Path) -> Result<Self, ExportError> {
        let path = dataset_root.join(FILE_NAME_INFO);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ExportError::InfoNotFound(path));
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|e| ExportError::InfoMalformed(e.to_string()))
    }

    /// File extension for transaction and asset files; datasets before
    /// api version 3 carry none
    pub fn file_extension(&self) -> &'static str {
        if self.api_version > 2 {
            FILE_NAME_EXTENSION
        } else {
            ""
        }
    }
}

/// Counts reported after a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub clients: u64,
    pub transactions: u64,
    pub objects: u64,
    pub assets: u64,
}

/// One export run over a dataset
///
/// Strictly sequential: clients are replayed one after another in sorted
/// order, and the store is exclusively owned for the run's duration.
pub struct Exporter {
    dataset_root: PathBuf,
    output_root: PathBuf,
}

impl Exporter {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(dataset_root: P, output_root: Q) -> Self {
        Exporter {
            dataset_root: dataset_root.as_ref().to_path_buf(),
            output_root: output_root.as_ref().to_path_buf(),
        }
    }

    /// Replay the dataset and project it onto the output tree
    ///
    /// Returns the materialized store plus the run counts. Frame integrity
    /// and merge failures abort the whole run; individual asset failures
    /// are logged and skipped.
    pub fn run(&self) -> Result<(Store, ExportSummary), ExportError> {
        let info = DatasetInfo::load(&self.dataset_root)?;
        let ext = info.file_extension();

        let transactions_root = self.dataset_root.join(FOLDER_NAME_TRANSACTIONS);
        // Sorted for cross-run determinism; directory listing order is
        // filesystem-dependent.
        let clients = replay::list_clients(&transactions_root)?;
        info!("Found {} clients", clients.len());

        let mut store = Store::new();
        let mut summary = ExportSummary {
            clients: clients.len() as u64,
            ..ExportSummary::default()
        };
        for client in &clients {
            let count = replay::replay_client(&mut store, &transactions_root, client, ext)?;
            info!("  ... {count} transactions from {client}");
            summary.transactions += count;
        }
        info!("Export of {} objects", store.len());

        let (objects, assets) =
            project::project_store(&store, &self.dataset_root, &self.output_root, ext)?;
        info!("Export of {assets} assets");

        summary.objects = objects;
        summary.assets = assets;
        Ok((store, summary))
    }
}

/// Join addressed path segments onto a base directory, appending the
/// version-dependent extension to the final segment
pub(crate) fn addressed_file(base: &Path, segments: &[String], ext: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    if !ext.is_empty() {
        if let Some(name) = path.file_name() {
            let name = format!("{}{ext}", name.to_string_lossy());
            path.set_file_name(name);
        }
    }
    path
}
