//! Multi-document comparison.
//!
//! Documents are paired by position. A file with fewer documents contributes
//! absent documents for the remaining positions.

use crate::diff::engine::diff_values;
use crate::diff::model::{Comparison, DocumentDiff};
use crate::model::Document;

/// Compare two document lists position by position.
///
/// Comments shown for a pair are the new document's when it has any,
/// otherwise the old document's. Pairs without changes are left out, and
/// each pair's changes are sorted by path.
pub fn compare_documents(old: &[Document], new: &[Document]) -> Comparison {
    let total = old.len().max(new.len());
    let mut documents = Vec::new();

    for idx in 0..total {
        let old_doc = old.get(idx);
        let new_doc = new.get(idx);
        let old_data = old_doc.and_then(|doc| doc.data.as_ref());
        let new_data = new_doc.and_then(|doc| doc.data.as_ref());

        if old_data.is_none() && new_data.is_none() {
            continue;
        }

        let mut changes = diff_values(old_data, new_data, "");
        if changes.is_empty() {
            continue;
        }
        changes.sort_by(|a, b| a.path.cmp(&b.path));

        let comments = match (old_doc, new_doc) {
            (_, Some(doc)) if !doc.comments.is_empty() => doc.comments.clone(),
            (Some(doc), _) => doc.comments.clone(),
            _ => Vec::new(),
        };

        tracing::debug!(
            doc_index = idx + 1,
            change_count = changes.len(),
            "document differs"
        );

        documents.push(DocumentDiff {
            index: idx + 1,
            total,
            comments,
            changes,
        });
    }

    Comparison {
        total_documents: total,
        documents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::ChangeKind;
    use crate::model::Value;

    fn doc(pairs: &[(&str, i64)]) -> Document {
        Document::new(Value::mapping(pairs.iter().map(|(k, v)| (*k, *v))))
    }

    #[test]
    fn test_pairs_by_index_and_skips_unchanged() {
        let old = vec![doc(&[("a", 1)]), doc(&[("b", 2)])];
        let new = vec![doc(&[("a", 1)]), doc(&[("b", 3)])];
        let comparison = compare_documents(&old, &new);
        assert_eq!(comparison.total_documents, 2);
        assert_eq!(comparison.documents.len(), 1);
        assert_eq!(comparison.documents[0].index, 2);
        assert_eq!(comparison.documents[0].total, 2);
        assert_eq!(comparison.documents[0].changes[0].path, ".b");
    }

    #[test]
    fn test_extra_document_is_a_root_addition() {
        let old = vec![doc(&[("a", 1)])];
        let new = vec![doc(&[("a", 1)]), doc(&[("b", 2)])];
        let comparison = compare_documents(&old, &new);
        assert_eq!(comparison.documents.len(), 1);
        let change = &comparison.documents[0].changes[0];
        assert_eq!(change.kind, ChangeKind::Addition);
        assert_eq!(change.path, "");
    }

    #[test]
    fn test_comments_prefer_new_document() {
        let old = vec![doc(&[("a", 1)]).with_comments(vec!["# old".into()])];
        let new = vec![doc(&[("a", 2)]).with_comments(vec!["# new".into()])];
        assert_eq!(compare_documents(&old, &new).documents[0].comments, vec!["# new"]);

        let new = vec![doc(&[("a", 2)])];
        assert_eq!(compare_documents(&old, &new).documents[0].comments, vec!["# old"]);
    }

    #[test]
    fn test_empty_inputs() {
        let comparison = compare_documents(&[], &[]);
        assert_eq!(comparison.total_documents, 0);
        assert!(!comparison.has_changes());
    }
}
