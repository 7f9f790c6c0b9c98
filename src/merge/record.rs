//! Change record parsing
//!
//! One change record is one field-level mutation instruction, serialized as
//! a single JSON line inside a transaction frame. The bookkeeping keys
//! `_id`, `_v` and `_type` are lifted out of the line; everything else is
//! the field map.

use crate::types::{LogicalTime, ObjectId};
use serde_json::{Map, Value};

/// A single field-level mutation instruction
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    /// Target object id, stable across changes to the same object
    pub id: ObjectId,
    /// Object type tag; consumed when the object is first materialized,
    /// never merged as a regular field
    pub object_type: Option<String>,
    /// Logical write time, the sole last-writer-wins ordering key
    pub time: LogicalTime,
    /// Field name → new value (`null` tombstones, scalars, nested mappings)
    pub fields: Map<String, Value>,
}

impl ChangeRecord {
    /// Parse one frame content line into a change record
    ///
    /// Returns the malformation reason on failure; the frame decoder wraps
    /// it with the line number.
    pub fn from_line(line: &str) -> Result<Self, String> {
        let value: Value =
            serde_json::from_str(line).map_err(|e| format!("not valid JSON: {e}"))?;
        let Value::Object(mut map) = value else {
            return Err("change record is not a JSON object".to_string());
        };

        let id = match map.remove("_id") {
            Some(Value::String(id)) => id,
            Some(_) => return Err("'_id' is not a string".to_string()),
            None => return Err("missing '_id'".to_string()),
        };
        let time = map
            .remove("_v")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| "missing or non-numeric '_v'".to_string())?;
        let object_type = match map.remove("_type") {
            Some(Value::String(t)) => Some(t),
            _ => None,
        };

        Ok(ChangeRecord {
            id,
            object_type,
            time,
            fields: map,
        })
    }
}
