//! Document data model.

pub mod document;
pub mod value;

pub use document::Document;
pub use value::{Mapping, Scalar, Value, ValueKind};
