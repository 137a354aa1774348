//! Canonicalization of value trees.
//!
//! The canonical form makes incidental ordering irrelevant: mapping keys
//! iterate in canonical order (guaranteed by [`Mapping`]) and plain
//! sequences are sorted. Record sequences keep their input order since they
//! are matched by identifier.

use crate::model::{Mapping, Value};
use crate::records::is_record_sequence;

/// Produce the canonical form of `value`.
///
/// Total, pure and idempotent.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Scalar(scalar) => Value::Scalar(scalar.clone()),
        Value::Mapping(map) => Value::Mapping(
            map.iter()
                .map(|(k, v)| (canonicalize(k), canonicalize(v)))
                .collect::<Mapping>(),
        ),
        Value::Sequence(items) => {
            let mut items: Vec<Value> = items.iter().map(canonicalize).collect();
            if !is_record_sequence(&items) {
                items.sort();
            }
            Value::Sequence(items)
        }
    }
}
