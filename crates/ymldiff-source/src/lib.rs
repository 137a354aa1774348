//! ymldiff source - reading YAML files into comparable documents
//!
//! Provides:
//! - binary detection and UTF-8 decoding of input files
//! - multi-document splitting on `---` / `...` markers
//! - comment extraction per document
//! - parsing through serde_yaml into canonical [`Document`]s
//!
//! [`Document`]: ymldiff_core::model::Document

pub mod comments;
pub mod errors;
pub mod loader;
pub mod split;

pub use comments::extract_comments;
pub use errors::Result;
pub use loader::{decode_text, load_documents, parse_documents};
pub use split::{split_documents, Segment};
