//! Loading YAML files into documents.

use crate::comments::extract_comments;
use crate::errors::{not_text, parse_error, read_error, Result};
use crate::split::split_documents;
use std::fs;
use std::path::Path;
use ymldiff_core::canonical::canonicalize;
use ymldiff_core::model::{Document, Value};

/// Decode raw file bytes as text.
///
/// NUL bytes or invalid UTF-8 mark the input as binary. A leading byte order
/// mark is dropped.
///
/// # Errors
///
/// `NotText` for binary input.
pub fn decode_text(bytes: &[u8], path: &str) -> Result<String> {
    if bytes.contains(&0) {
        return Err(not_text(path));
    }
    let text = std::str::from_utf8(bytes).map_err(|_| not_text(path))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

/// Read and parse every document of the file at `path`.
///
/// # Errors
///
/// `Io` when the file cannot be read, otherwise as [`decode_text`] and
/// [`parse_documents`].
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let shown = path.display().to_string();
    tracing::debug!(path = %shown, "reading input");

    let bytes = fs::read(path).map_err(|e| read_error(&shown, &e))?;
    let text = decode_text(&bytes, &shown)?;
    parse_documents(&text, &shown)
}

/// Parse a multi-document YAML text.
///
/// `path` is used for error reporting only. A `---` marker always opens a
/// document, with no data when nothing follows it. Other comment-only
/// regions do not count as documents: their comments go to the next
/// document, or to the last one when no document follows.
///
/// # Errors
///
/// `Parse` for the first malformed document, with its 1-based index.
pub fn parse_documents(text: &str, path: &str) -> Result<Vec<Document>> {
    let mut documents: Vec<Document> = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for segment in split_documents(text) {
        let comments = extract_comments(&segment.text);
        if !segment.is_document() {
            pending.extend(comments);
            continue;
        }

        let data = if segment.has_content() {
            let index = documents.len() + 1;
            let raw: serde_yaml::Value = serde_yaml::from_str(&segment.positioned_text())
                .map_err(|e| parse_error(path, index, &e))?;
            Some(canonicalize(&Value::from(raw))).filter(|v| !v.is_null())
        } else {
            None
        };

        let mut all_comments = std::mem::take(&mut pending);
        all_comments.extend(comments);
        documents.push(Document {
            data,
            comments: all_comments,
        });
    }

    if let Some(last) = documents.last_mut() {
        last.comments.append(&mut pending);
    }

    tracing::debug!(path, doc_count = documents.len(), "parsed documents");
    Ok(documents)
}
