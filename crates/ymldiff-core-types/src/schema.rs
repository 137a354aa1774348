//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Input identifiers
pub const FIELD_PATH: &str = "path";
pub const FIELD_OLD_PATH: &str = "old_path";
pub const FIELD_NEW_PATH: &str = "new_path";
pub const FIELD_DOC_INDEX: &str = "doc_index";

// Collection sizes
pub const FIELD_DOC_COUNT: &str = "doc_count";
pub const FIELD_CHANGE_COUNT: &str = "change_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_LOAD_DOCUMENTS: &str = "load_documents";
pub const OP_COMPARE_FILES: &str = "compare_files";
