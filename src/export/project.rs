//! Projection of materialized objects onto the output tree
//!
//! Each object with an id and type becomes `<out>/<type>/<id>.json`;
//! resolvable asset references are copied next to it under
//! `<out>/<type>/<id>/<displayName>`. A failing asset copy never blocks
//! the owning object's JSON projection or the rest of the run.

use super::addressed_file;
use crate::asset::parse_asset_url;
use crate::error::ExportError;
use crate::merge::{MaterializedObject, Store};
use crate::types::FOLDER_NAME_ASSETS;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Object fields that may carry asset references
pub const ASSET_FIELDS: [&str; 3] = ["asset", "assetOriginal", "assetExtraction"];

/// Write every typed object and its assets, returning (objects, assets)
/// counts
pub(crate) fn project_store(
    store: &Store,
    dataset_root: &Path,
    output_root: &Path,
    ext: &str,
) -> Result<(u64, u64), ExportError> {
    let mut objects = 0u64;
    let mut assets = 0u64;
    for (id, object) in store {
        let Some(object_type) = object.object_type() else {
            continue;
        };
        if id.is_empty() || object_type.is_empty() {
            continue;
        }

        let type_dir = output_root.join(object_type);
        fs::create_dir_all(&type_dir)?;
        let json = serde_json::to_string_pretty(&Value::Object(object.state.clone()))?;
        fs::write(type_dir.join(format!("{id}.json")), json)?;
        objects += 1;

        assets += export_assets(object, dataset_root, &type_dir.join(id), ext);
    }
    Ok((objects, assets))
}

/// Copy every resolvable asset of one object, logging and skipping failures
fn export_assets(
    object: &MaterializedObject,
    dataset_root: &Path,
    asset_dir: &Path,
    ext: &str,
) -> u64 {
    let mut copied = 0u64;
    for field in ASSET_FIELDS {
        let Some(url) = object.state.get(field).and_then(Value::as_str) else {
            continue;
        };
        let Some(asset) = parse_asset_url(url) else {
            warn!(field, url, "asset url not resolvable, skipping");
            continue;
        };

        let source = addressed_file(
            &dataset_root
                .join(FOLDER_NAME_ASSETS)
                .join(&asset.content_id),
            &asset.path_segments,
            ext,
        );
        let result = fs::create_dir_all(asset_dir)
            .and_then(|()| fs::copy(&source, asset_dir.join(&asset.display_name)));
        match result {
            Ok(_) => copied += 1,
            Err(e) => warn!(field, source = %source.display(), "asset copy failed: {e}"),
        }
    }
    copied
}
