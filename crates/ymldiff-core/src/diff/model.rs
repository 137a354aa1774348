//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, PartialEq`. Changes are
//! produced in discovery order; the renderer imposes the final ordering.

use crate::model::Value;
use serde::Serialize;

/// Kind of a single reported difference.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Present only in the new document
    Addition,
    /// Present only in the old document
    Deletion,
    /// Present in both with different values
    Modification,
}

impl ChangeKind {
    /// The literal line marker for this kind.
    pub fn marker(&self) -> &'static str {
        match self {
            ChangeKind::Addition => "+ ",
            ChangeKind::Deletion => "- ",
            ChangeKind::Modification => "~ ",
        }
    }
}

/// One difference between two documents, anchored at a path.
///
/// Construct through [`Change::addition`], [`Change::deletion`] and
/// [`Change::modification`] so that the value slots always match the kind.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Change {
    pub kind: ChangeKind,
    /// `.key` for mapping descent, `[id-or-index]` for sequences; `""` is the root
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl Change {
    pub fn addition(path: impl Into<String>, new_value: Value) -> Self {
        Self {
            kind: ChangeKind::Addition,
            path: path.into(),
            old_value: None,
            new_value: Some(new_value),
        }
    }

    pub fn deletion(path: impl Into<String>, old_value: Value) -> Self {
        Self {
            kind: ChangeKind::Deletion,
            path: path.into(),
            old_value: Some(old_value),
            new_value: None,
        }
    }

    pub fn modification(path: impl Into<String>, old_value: Value, new_value: Value) -> Self {
        Self {
            kind: ChangeKind::Modification,
            path: path.into(),
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }
}

/// Changes found in one document pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DocumentDiff {
    /// 1-based position of the document in its file
    pub index: usize,
    /// Number of document positions compared (the larger of the two counts)
    pub total: usize,
    pub comments: Vec<String>,
    pub changes: Vec<Change>,
}

/// Result of comparing two multi-document inputs.
///
/// Only document pairs with at least one change are listed.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Comparison {
    pub total_documents: usize,
    pub documents: Vec<DocumentDiff>,
}

impl Comparison {
    pub fn has_changes(&self) -> bool {
        self.documents.iter().any(|doc| !doc.changes.is_empty())
    }

    pub fn change_count(&self) -> usize {
        self.documents.iter().map(|doc| doc.changes.len()).sum()
    }
}
