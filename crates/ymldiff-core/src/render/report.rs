//! Document-level report renderer.

use crate::diff::model::Comparison;
use crate::render::backend::{AnsiBackend, ColorBackend, PlainBackend, SemanticColor};
use crate::render::changes::{render_changes_with, NO_CHANGES};
use crate::render::options::RenderOptions;

/// Render a multi-document comparison.
///
/// Every document with changes gets a header, its comments (when enabled),
/// its change list and a blank line. Unchanged documents are omitted, and
/// a comparison without any change renders as `No changes found.`.
pub fn render_report(comparison: &Comparison, options: &RenderOptions) -> String {
    if options.color {
        render_report_with(comparison, options, &AnsiBackend)
    } else {
        render_report_with(comparison, options, &PlainBackend)
    }
}

fn render_report_with<B: ColorBackend>(
    comparison: &Comparison,
    options: &RenderOptions,
    backend: &B,
) -> String {
    if !comparison.has_changes() {
        return NO_CHANGES.to_string();
    }

    let mut out = String::new();
    for doc in comparison.documents.iter().filter(|doc| !doc.changes.is_empty()) {
        let header = if options.doc_separator_comments {
            format!("--- # YAML Document: {}/{}", doc.index, doc.total)
        } else {
            "---".to_string()
        };
        backend.write_styled(&mut out, &header, SemanticColor::Header);
        out.push('\n');

        if options.show_comments {
            for comment in &doc.comments {
                backend.write_styled(&mut out, comment, SemanticColor::Header);
                out.push('\n');
            }
        }

        out.push_str(&render_changes_with(&doc.changes, backend));
        out.push('\n');
    }
    out
}
