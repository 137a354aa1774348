//! File comparison command with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The source and core crates use only `tracing::debug!()` for internal
//! details.

use std::path::{Path, PathBuf};
use std::time::Instant;
use ymldiff_core::diff::{compare_documents, Comparison};
use ymldiff_core::errors::Result;
use ymldiff_core::model::Document;
use ymldiff_core::{log_op_end, log_op_error, log_op_start};
use ymldiff_core_types::schema::{OP_COMPARE_FILES, OP_LOAD_DOCUMENTS};
use ymldiff_source::load_documents;

/// Inputs of a file comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
}

impl CompareOptions {
    pub fn new(old_path: impl Into<PathBuf>, new_path: impl Into<PathBuf>) -> Self {
        Self {
            old_path: old_path.into(),
            new_path: new_path.into(),
        }
    }
}

/// Compare two YAML files document by document
///
/// ## Errors
///
/// - `Io`: an input could not be read
/// - `NotText`: an input is binary or not UTF-8
/// - `Parse`: a document is not well-formed YAML
///
/// The old file is loaded first; the first failure aborts the comparison.
pub fn compare_files(options: &CompareOptions) -> Result<Comparison> {
    let old_path = options.old_path.display().to_string();
    let new_path = options.new_path.display().to_string();
    log_op_start!(OP_COMPARE_FILES, old_path = %old_path, new_path = %new_path);
    let start = Instant::now();

    let result = compare_files_impl(options).map_err(|e| {
        log_op_error!(
            OP_COMPARE_FILES,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        OP_COMPARE_FILES,
        duration_ms = start.elapsed().as_millis() as u64,
        doc_count = result.total_documents,
        change_count = result.change_count()
    );

    Ok(result)
}

fn compare_files_impl(options: &CompareOptions) -> Result<Comparison> {
    let old = load(&options.old_path)?;
    let new = load(&options.new_path)?;
    Ok(compare_documents(&old, &new))
}

fn load(path: &Path) -> Result<Vec<Document>> {
    let shown = path.display().to_string();
    log_op_start!(OP_LOAD_DOCUMENTS, path = %shown);
    let start = Instant::now();

    let documents = load_documents(path).map_err(|e| {
        log_op_error!(
            OP_LOAD_DOCUMENTS,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            path = %shown
        );
        e
    })?;

    log_op_end!(
        OP_LOAD_DOCUMENTS,
        duration_ms = start.elapsed().as_millis() as u64,
        path = %shown,
        doc_count = documents.len()
    );

    Ok(documents)
}
