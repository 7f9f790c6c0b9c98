//! Hierarchical last-writer-wins merge engine
//!
//! Reconstructs current object state from an unordered multiset of
//! field-level change records. Per field, the write with the greatest
//! logical time wins; `null` writes tombstone the field; nested mappings
//! recurse with the parent record's time re-tagged onto every nested field.
//!
//! Equal-timestamp conflicts are resolved by value: the larger value under
//! [`value::value_cmp`] wins, which keeps the accept/reject decision
//! independent of the order clients are replayed in.

pub mod history;
pub mod record;
pub mod value;

pub use history::{FieldHistory, RESERVED_SUFFIX};
pub use record::ChangeRecord;

use crate::error::MergeError;
use crate::types::{LogicalTime, ObjectId};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// All materialized objects keyed by id. Exclusively owned by the replay
/// driver for the duration of a run.
pub type Store = BTreeMap<ObjectId, MaterializedObject>;

/// Reconstructed current state of one object plus per-field provenance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterializedObject {
    /// Field name → current value; seeded with `_id` and `_type`
    pub state: Map<String, Value>,
    /// Per-field write-time history mirroring `state`
    pub history: FieldHistory,
}

impl MaterializedObject {
    fn seed(id: &str, object_type: Option<&str>) -> Self {
        let mut state = Map::new();
        state.insert("_id".to_string(), Value::String(id.to_string()));
        if let Some(t) = object_type {
            state.insert("_type".to_string(), Value::String(t.to_string()));
        }
        MaterializedObject {
            state,
            history: FieldHistory::default(),
        }
    }

    /// Object type tag, if the object was ever created with one
    pub fn object_type(&self) -> Option<&str> {
        self.state.get("_type").and_then(Value::as_str)
    }
}

/// Apply one change record to the store
///
/// Creates the target object on first sight, then merges every field of the
/// record under LWW semantics. Stale writes are silently discarded; only a
/// reserved-suffix field name is an error.
pub fn apply_change(store: &mut Store, change: &ChangeRecord) -> Result<(), MergeError> {
    let object = store
        .entry(change.id.clone())
        .or_insert_with(|| MaterializedObject::seed(&change.id, change.object_type.as_deref()));
    apply_fields(
        &change.id,
        &mut object.state,
        &mut object.history,
        &change.fields,
        change.time,
    )
}

fn apply_fields(
    id: &ObjectId,
    state: &mut Map<String, Value>,
    history: &mut FieldHistory,
    fields: &Map<String, Value>,
    time: LogicalTime,
) -> Result<(), MergeError> {
    for (field, incoming) in fields {
        if field.ends_with(RESERVED_SUFFIX) {
            return Err(MergeError::InvalidFieldName {
                id: id.clone(),
                field: field.clone(),
            });
        }

        // Nested mapping: recurse with the parent record's time
        if let Value::Object(nested) = incoming {
            if !matches!(state.get(field), Some(Value::Object(_))) {
                // Structural creation; the recorded time marks when the
                // sub-object came into being, not its newest leaf write.
                history.leaf_times.insert(field.clone(), time);
                state.insert(field.clone(), Value::Object(Map::new()));
            }
            let Some(Value::Object(child_state)) = state.get_mut(field) else {
                continue;
            };
            let child_history = history.children.entry(field.clone()).or_default();
            apply_fields(id, child_state, child_history, nested, time)?;
            continue;
        }

        // Leaf write: scalar or tombstone
        let accepted = match history.leaf_time(field) {
            None => true,
            Some(prior) => match prior.total_cmp(&time) {
                Ordering::Less => true,
                Ordering::Greater => false,
                // Equal time: larger value wins, replay-order-independent
                Ordering::Equal => {
                    value::value_cmp(state.get(field), Some(incoming)) != Ordering::Greater
                }
            },
        };

        if accepted {
            history.leaf_times.insert(field.clone(), time);
            if incoming.is_null() {
                state.remove(field);
            } else {
                state.insert(field.clone(), incoming.clone());
            }
        }
    }
    Ok(())
}
