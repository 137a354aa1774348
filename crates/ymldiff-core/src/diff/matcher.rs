//! Identity-based matching for record sequences.
//!
//! Elements are keyed by [`record_identifier`] instead of position, so a
//! reordered list of records produces no changes and an edited record
//! surfaces as nested changes under `[identifier]`.

use crate::diff::engine::{diff_into, element_path};
use crate::diff::model::Change;
use crate::model::Value;
use crate::records::record_identifier;
use std::collections::BTreeMap;

/// Index records by identifier. Later duplicates overwrite earlier ones;
/// records without an identifier are not addressable and are skipped.
fn index_records<'a>(items: &'a [Value], path: &str) -> BTreeMap<String, &'a Value> {
    let mut index = BTreeMap::new();
    for (position, item) in items.iter().enumerate() {
        match record_identifier(item) {
            Some(id) => {
                if index.insert(id.clone(), item).is_some() {
                    tracing::debug!(path, identifier = %id, position, "duplicate record identifier, keeping later record");
                }
            }
            None => {
                tracing::debug!(path, position, "record without identifier skipped");
            }
        }
    }
    index
}

/// Diff two record sequences by identifier, rooted at `path`.
pub fn match_and_diff(old: &[Value], new: &[Value], path: &str) -> Vec<Change> {
    let old_index = index_records(old, path);
    let new_index = index_records(new, path);
    let mut changes = Vec::new();

    for (id, old_record) in &old_index {
        let record_path = element_path(path, id);
        match new_index.get(id) {
            Some(new_record) => {
                diff_into(Some(*old_record), Some(*new_record), &record_path, &mut changes)
            }
            None => changes.push(Change::deletion(record_path, (*old_record).clone())),
        }
    }
    for (id, new_record) in &new_index {
        if !old_index.contains_key(id) {
            changes.push(Change::addition(element_path(path, id), (*new_record).clone()));
        }
    }

    changes
}
