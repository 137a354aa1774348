//! Command orchestration layer.

pub mod compare;
