//! One parsed document of a (possibly multi-document) input.

use crate::model::value::Value;

/// A parsed document together with the comments found in its source text.
///
/// `data` is `None` when the document has no content. Comments are kept in
/// source order and always start with `#`; their content is not interpreted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub data: Option<Value>,
    pub comments: Vec<String>,
}

impl Document {
    pub fn new(data: Value) -> Self {
        Self {
            data: Some(data),
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }
}
