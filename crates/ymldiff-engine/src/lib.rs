//! ymldiff engine - orchestration layer
//!
//! Coordinates the document source and the comparison core, and owns the
//! operation lifecycle logging.

pub mod commands;

pub use commands::compare::{compare_files, CompareOptions};
