//! Identifiable records.
//!
//! A sequence whose elements are all mappings, at least one of which carries
//! a natural identifier field, is compared by identity instead of position.

use crate::model::Value;

/// Identifier fields, in priority order.
pub const IDENTIFIER_FIELDS: [&str; 3] = ["name", "key", "id"];

/// Extract the identifier of a single record.
///
/// Returns the display form of the first identifier field present, or `None`
/// when the value is not a mapping or carries none of the fields.
pub fn record_identifier(record: &Value) -> Option<String> {
    IDENTIFIER_FIELDS
        .iter()
        .find_map(|field| record.get(field))
        .map(|id| id.display_form().into_owned())
}

/// Whether `items` is an identifiable-record sequence.
pub fn is_record_sequence(items: &[Value]) -> bool {
    !items.is_empty()
        && items.iter().all(|item| item.as_mapping().is_some())
        && items.iter().any(|item| record_identifier(item).is_some())
}
