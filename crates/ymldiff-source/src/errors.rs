//! Error helpers for ymldiff-source
//!
//! Wraps the core `ExError` with loader-specific constructors. Every error
//! carries the offending path and the `load_documents` operation.

use ymldiff_core::errors::{ExError, YmlDiffError};
use ymldiff_core_types::schema::OP_LOAD_DOCUMENTS;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a file read error
pub fn read_error(path: &str, err: &std::io::Error) -> ExError {
    ExError::from(YmlDiffError::FileRead {
        path: path.to_string(),
        reason: err.to_string(),
    })
    .with_op(OP_LOAD_DOCUMENTS)
}

/// Create a not-text error for binary or non-UTF-8 input
pub fn not_text(path: &str) -> ExError {
    ExError::from(YmlDiffError::NotText {
        path: path.to_string(),
    })
    .with_op(OP_LOAD_DOCUMENTS)
}

/// Create a parse error for the 1-based `document` of `path`
pub fn parse_error(path: &str, document: usize, err: &serde_yaml::Error) -> ExError {
    ExError::from(YmlDiffError::Parse {
        path: path.to_string(),
        document,
        reason: err.to_string(),
    })
    .with_op(OP_LOAD_DOCUMENTS)
}
