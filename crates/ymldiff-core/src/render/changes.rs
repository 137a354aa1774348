//! Change list renderer.

use crate::diff::model::{Change, ChangeKind};
use crate::model::Value;
use crate::render::backend::{AnsiBackend, ColorBackend, PlainBackend, SemanticColor};
use crate::render::format::{format_value, prefix_block, BLOCK_INDENT};
use crate::render::options::RenderOptions;

/// Literal output for an empty change list.
pub const NO_CHANGES: &str = "No changes found.\n";

/// Render a change list as a line-oriented report.
///
/// Changes are sorted by path (byte order, stable) regardless of the order
/// in which they were discovered.
pub fn render_changes(changes: &[Change], options: &RenderOptions) -> String {
    if options.color {
        render_changes_with(changes, &AnsiBackend)
    } else {
        render_changes_with(changes, &PlainBackend)
    }
}

/// Render a change list with an explicit color backend.
pub fn render_changes_with<B: ColorBackend>(changes: &[Change], backend: &B) -> String {
    if changes.is_empty() {
        return NO_CHANGES.to_string();
    }

    let mut sorted: Vec<&Change> = changes.iter().collect();
    sorted.sort_by(|a, b| a.path.cmp(&b.path));

    let mut out = String::new();
    for change in sorted {
        let marker = backend.styled(change.kind.marker(), change.kind.into());
        match (change.kind, &change.old_value, &change.new_value) {
            (ChangeKind::Addition, _, Some(value)) | (ChangeKind::Deletion, Some(value), _) => {
                write_single(&mut out, &marker, &change.path, value);
            }
            (ChangeKind::Modification, Some(old), Some(new)) => {
                write_modification(&mut out, backend, &marker, &change.path, old, new);
            }
            // Slots always match the kind when built through the constructors.
            (kind, old, new) => {
                tracing::warn!(path = %change.path, ?kind, has_old = old.is_some(), has_new = new.is_some(), "change with inconsistent value slots");
                let value = new.as_ref().or(old.as_ref()).unwrap_or(&Value::Null);
                write_single(&mut out, &marker, &change.path, value);
            }
        }
    }
    out
}

fn write_header(out: &mut String, marker: &str, path: &str) {
    out.push_str(marker);
    out.push_str(path);
    out.push(':');
}

fn write_single(out: &mut String, marker: &str, path: &str, value: &Value) {
    write_header(out, marker, path);
    let formatted = format_value(value);
    if formatted.contains('\n') {
        out.push('\n');
        out.push_str(&prefix_block(&formatted, marker));
    } else {
        out.push(' ');
        out.push_str(&formatted);
        out.push('\n');
    }
}

fn write_modification<B: ColorBackend>(
    out: &mut String,
    backend: &B,
    marker: &str,
    path: &str,
    old: &Value,
    new: &Value,
) {
    write_header(out, marker, path);
    let old_text = format_value(old);
    let new_text = format_value(new);

    let both_strings = old.as_str().is_some() && new.as_str().is_some();

    if old_text.contains('\n') || new_text.contains('\n') {
        out.push('\n');
        if both_strings {
            write_styled_block(out, backend, &old_text, marker, SemanticColor::Removed);
        } else {
            out.push_str(&prefix_block(&old_text, marker));
        }
        out.push_str(marker);
        out.push_str(BLOCK_INDENT);
        out.push_str("→\n");
        if both_strings {
            write_styled_block(out, backend, &new_text, marker, SemanticColor::Added);
        } else {
            out.push_str(&prefix_block(&new_text, marker));
        }
        return;
    }

    out.push(' ');
    if both_strings {
        backend.write_styled(out, &old_text, SemanticColor::Removed);
        out.push_str(" → ");
        backend.write_styled(out, &new_text, SemanticColor::Added);
    } else {
        out.push_str(&old_text);
        out.push_str(" → ");
        out.push_str(&new_text);
    }
    out.push('\n');
}

/// Same layout as [`prefix_block`], with the text of each line styled.
fn write_styled_block<B: ColorBackend>(
    out: &mut String,
    backend: &B,
    block: &str,
    marker: &str,
    color: SemanticColor,
) {
    for (idx, line) in block.split('\n').enumerate() {
        if idx == 0 && line.is_empty() {
            continue;
        }
        out.push_str(marker);
        if line.trim().is_empty() {
            out.push_str(line);
        } else {
            out.push_str(BLOCK_INDENT);
            backend.write_styled(out, line, color);
        }
        out.push('\n');
    }
}
