//! ymldiff core - semantic comparison of YAML value trees
//!
//! This crate holds everything that does not touch the filesystem:
//! - the [`Value`] tree model and its canonical ordering
//! - canonicalization ([`canonicalize`]) and record detection
//! - the diff engine and identity matcher for record sequences
//! - text rendering of changes with optional color
//! - the error and logging facilities shared by the other crates

pub mod canonical;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod records;
pub mod render;

pub use ymldiff_core_types as core_types;

// Re-export commonly used types
pub use canonical::canonicalize;
pub use diff::{compare_documents, diff_values, Change, ChangeKind, Comparison, DocumentDiff};
pub use errors::{ExError, ExErrorKind, Result, YmlDiffError};
pub use model::{Document, Scalar, Value, ValueKind};
pub use render::{render_changes, render_report, RenderOptions};
