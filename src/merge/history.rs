//! Per-field write-time history
//!
//! The original wire protocol tags nested histories by appending `$` to the
//! field name inside a single flat map. Here leaf write times and nested
//! sub-histories live in two separate maps keyed by the plain field name,
//! which removes the suffix-collision hazard entirely. The `$` suffix stays
//! reserved on incoming field names.

use crate::types::LogicalTime;
use std::collections::BTreeMap;

/// Reserved suffix marking internal history bookkeeping; forbidden in
/// incoming field names.
pub const RESERVED_SUFFIX: char = '$';

/// Write-time provenance for one object or nested sub-object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldHistory {
    /// Field name → logical time of the last accepted write. For a nested
    /// field this is the structural creation time of the sub-object, not
    /// the newest leaf write inside it.
    pub leaf_times: BTreeMap<String, LogicalTime>,
    /// Field name → the nested sub-object's own history
    pub children: BTreeMap<String, FieldHistory>,
}

impl FieldHistory {
    /// Last accepted write time for a field, if any write was ever accepted
    pub fn leaf_time(&self, field: &str) -> Option<LogicalTime> {
        self.leaf_times.get(field).copied()
    }

    /// Nested history for a sub-object field, if one was ever created
    pub fn child(&self, field: &str) -> Option<&FieldHistory> {
        self.children.get(field)
    }
}
