//! Schema definitions for diff reports.
//!
//! Defines the structures that represent differences between two
//! schema documents.

use crate::utils::config::DIFF_REPORT_VERSION;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A changed leaf value, keyed in the report by its JSON path
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValueChange {
    pub old_value: Value,
    pub new_value: Value,
}

/// A leaf whose JSON type changed between the two documents
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeChange {
    pub old_type: &'static str,
    pub new_type: &'static str,
    pub old_value: Value,
    pub new_value: Value,
}

/// Complete structural diff between a source and a target document
///
/// Paths follow the `root['fields'][0]['type']` convention, so a report
/// entry can be located in either document by eye.
#[derive(Debug, Clone, Serialize)]
pub struct DiffReport {
    /// Report format version
    pub report_version: String,

    /// Timestamp when the diff was generated
    pub generated_at: String,

    /// Leaves present in both documents with different values
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub values_changed: BTreeMap<String, ValueChange>,

    /// Leaves present in both documents with different JSON types
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub type_changes: BTreeMap<String, TypeChange>,

    /// Mapping keys only present in the target
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dictionary_item_added: BTreeMap<String, Value>,

    /// Mapping keys only present in the source
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dictionary_item_removed: BTreeMap<String, Value>,

    /// Array items only present in the target
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub iterable_item_added: BTreeMap<String, Value>,

    /// Array items only present in the source
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub iterable_item_removed: BTreeMap<String, Value>,
}

impl DiffReport {
    pub fn new() -> Self {
        Self {
            report_version: DIFF_REPORT_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            values_changed: BTreeMap::new(),
            type_changes: BTreeMap::new(),
            dictionary_item_added: BTreeMap::new(),
            dictionary_item_removed: BTreeMap::new(),
            iterable_item_added: BTreeMap::new(),
            iterable_item_removed: BTreeMap::new(),
        }
    }

    /// True when the two documents were structurally identical
    pub fn is_empty(&self) -> bool {
        self.change_count() == 0
    }

    /// Total number of recorded differences across all categories
    pub fn change_count(&self) -> usize {
        self.values_changed.len()
            + self.type_changes.len()
            + self.dictionary_item_added.len()
            + self.dictionary_item_removed.len()
            + self.iterable_item_added.len()
            + self.iterable_item_removed.len()
    }
}

impl Default for DiffReport {
    fn default() -> Self {
        Self::new()
    }
}
