//! Core types shared across ymldiff facilities
//!
//! This crate holds the canonical field keys and event names used by the
//! logging macros and by error reporting, so that every crate in the
//! workspace emits the same structured vocabulary.

pub mod schema;
