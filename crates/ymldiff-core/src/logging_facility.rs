//! Structured logging facility for ymldiff
//!
//! Diagnostics go to stderr so that stdout carries only the report.
//!
//! ```rust
//! use ymldiff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Quiet);
//! ```
//!
//! Operations are bracketed with `log_op_start!`, `log_op_end!` and
//! `log_op_error!`, which emit the field names from
//! [`crate::core_types::schema`].

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
