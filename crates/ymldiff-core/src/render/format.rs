//! Value formatting for the text report.

use crate::model::Value;

/// Indentation added in front of every non-blank line of a nested block.
pub const BLOCK_INDENT: &str = "   ";

/// Format a value for display.
///
/// `Null` is `null`, scalars use their natural text form, mappings and
/// sequences are written as a YAML block without the trailing newline.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Scalar(scalar) => scalar.to_string(),
        Value::Mapping(_) | Value::Sequence(_) => yaml_block(value),
    }
}

fn yaml_block(value: &Value) -> String {
    match serde_yaml::to_string(value) {
        Ok(text) => text.trim_end_matches('\n').to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "YAML serialization failed, using flow form");
            value.to_string()
        }
    }
}

/// Prefix every line of a multi-line block.
///
/// Each line gets `prefix`, then [`BLOCK_INDENT`] when it is not blank. An
/// empty first line is dropped.
pub fn prefix_block(block: &str, prefix: &str) -> String {
    let mut out = String::new();
    for (idx, line) in block.split('\n').enumerate() {
        if idx == 0 && line.is_empty() {
            continue;
        }
        out.push_str(prefix);
        if !line.trim().is_empty() {
            out.push_str(BLOCK_INDENT);
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
