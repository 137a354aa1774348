//! Structural diff of canonical value trees.
//!
//! ## Entry points
//!
//! ```
//! use ymldiff_core::canonical::canonicalize;
//! use ymldiff_core::diff::diff_values;
//! use ymldiff_core::model::Value;
//!
//! let old = canonicalize(&Value::mapping([("port", 80)]));
//! let new = canonicalize(&Value::mapping([("port", 8080)]));
//! let changes = diff_values(Some(&old), Some(&new), "");
//! assert_eq!(changes[0].path, ".port");
//! ```
//!
//! ## Guarantees
//!
//! - **Reflexivity**: equal canonical trees produce no changes.
//! - **Atomic kind changes**: a value changing kind is one modification.
//! - **Identity matching**: record sequences are matched by `name`, `key`
//!   or `id`, so reordering records is not a change.

pub mod documents;
pub mod engine;
pub mod matcher;
pub mod model;

pub use documents::compare_documents;
pub use engine::diff_values;
pub use matcher::match_and_diff;
pub use model::{Change, ChangeKind, Comparison, DocumentDiff};
