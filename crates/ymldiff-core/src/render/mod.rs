//! Text rendering of diffs.
//!
//! [`render_changes`] renders one change list; [`render_report`] renders a
//! whole multi-document [`Comparison`](crate::diff::Comparison) with
//! per-document headers and comments.

pub mod backend;
pub mod changes;
pub mod format;
pub mod options;
pub mod report;

pub use backend::{AnsiBackend, ColorBackend, PlainBackend, SemanticColor};
pub use changes::{render_changes, render_changes_with, NO_CHANGES};
pub use format::format_value;
pub use options::RenderOptions;
pub use report::render_report;
