//! Tree diff computation engine.
//!
//! The entry point is [`diff_values`], which walks two canonical trees in
//! lockstep. Record sequences are handed to [`crate::diff::matcher`].

use crate::diff::matcher::match_and_diff;
use crate::diff::model::Change;
use crate::model::Value;
use crate::records::is_record_sequence;

/// Path of a mapping entry below `path`.
pub(crate) fn field_path(path: &str, key: &Value) -> String {
    format!("{}.{}", path, key.display_form())
}

/// Path of a sequence element below `path`, by index or identifier.
pub(crate) fn element_path(path: &str, segment: impl std::fmt::Display) -> String {
    format!("{}[{}]", path, segment)
}

/// Compute the changes turning `old` into `new`, rooted at `path`.
///
/// Both sides must be canonical. `None` and a present `Null` both mean
/// "no value": `(None, Some(v))` is an addition, `(Some(v), None)` a deletion.
pub fn diff_values(old: Option<&Value>, new: Option<&Value>, path: &str) -> Vec<Change> {
    let mut changes = Vec::new();
    diff_into(old, new, path, &mut changes);
    changes
}

pub(crate) fn diff_into(
    old: Option<&Value>,
    new: Option<&Value>,
    path: &str,
    changes: &mut Vec<Change>,
) {
    let old = old.filter(|v| !v.is_null());
    let new = new.filter(|v| !v.is_null());

    let (old, new) = match (old, new) {
        (None, None) => return,
        (None, Some(new)) => {
            changes.push(Change::addition(path, new.clone()));
            return;
        }
        (Some(old), None) => {
            changes.push(Change::deletion(path, old.clone()));
            return;
        }
        (Some(old), Some(new)) => (old, new),
    };

    if old == new {
        return;
    }

    // A kind change is reported atomically.
    if old.kind() != new.kind() {
        changes.push(Change::modification(path, old.clone(), new.clone()));
        return;
    }

    match (old, new) {
        (Value::Mapping(old_map), Value::Mapping(new_map)) => {
            for (key, old_value) in old_map {
                match new_map.get(key) {
                    Some(new_value) => {
                        diff_into(Some(old_value), Some(new_value), &field_path(path, key), changes)
                    }
                    None => changes.push(Change::deletion(field_path(path, key), old_value.clone())),
                }
            }
            for (key, new_value) in new_map {
                if !old_map.contains_key(key) {
                    changes.push(Change::addition(field_path(path, key), new_value.clone()));
                }
            }
        }
        (Value::Sequence(old_items), Value::Sequence(new_items)) => {
            if is_record_sequence(old_items) && is_record_sequence(new_items) {
                changes.extend(match_and_diff(old_items, new_items, path));
            } else {
                diff_positional(old_items, new_items, path, changes);
            }
        }
        _ => changes.push(Change::modification(path, old.clone(), new.clone())),
    }
}

/// Element-by-element comparison of sorted plain sequences.
fn diff_positional(old: &[Value], new: &[Value], path: &str, changes: &mut Vec<Change>) {
    let shared = old.len().min(new.len());
    for idx in 0..shared {
        diff_into(Some(&old[idx]), Some(&new[idx]), &element_path(path, idx), changes);
    }
    for (idx, surplus) in old.iter().enumerate().skip(shared) {
        changes.push(Change::deletion(element_path(path, idx), surplus.clone()));
    }
    for (idx, surplus) in new.iter().enumerate().skip(shared) {
        changes.push(Change::addition(element_path(path, idx), surplus.clone()));
    }
}
