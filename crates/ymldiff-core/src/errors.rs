use thiserror::Error;

/// Result type alias using the canonical error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling
/// and tests. The comparison core is total; every kind originates at the
/// input or output boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Input file could not be read
    Io,
    /// Input is binary or not valid UTF-8
    NotText,
    /// Input is not well-formed YAML
    Parse,
    /// Output could not be serialized
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::NotText => "ERR_NOT_TEXT",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// needed to report a failed comparison: operation, input path and the
/// 1-based document index.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    document: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            document: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add input path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add document index context (1-based)
    pub fn with_document(mut self, document: usize) -> Self {
        self.document = Some(document);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the input path, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the document index, if any
    pub fn document(&self) -> Option<usize> {
        self.document
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(document) = self.document {
            write!(f, " (document: {})", document)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Typed failures raised while preparing a comparison
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YmlDiffError {
    /// Input file could not be read
    #[error("Failed to read {path}: {reason}")]
    FileRead { path: String, reason: String },

    /// Input is binary or not valid UTF-8
    #[error("{path} is not a text file")]
    NotText { path: String },

    /// A document is not well-formed YAML
    #[error("Error parsing {path}: {reason}")]
    Parse {
        path: String,
        document: usize,
        reason: String,
    },

    /// Output serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from YmlDiffError to ExError
impl From<YmlDiffError> for ExError {
    fn from(err: YmlDiffError) -> Self {
        match err {
            YmlDiffError::FileRead { path, reason } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(format!("failed to read file: {}", reason)),

            YmlDiffError::NotText { path } => ExError::new(ExErrorKind::NotText)
                .with_path(path)
                .with_message("input is not a text file"),

            YmlDiffError::Parse {
                path,
                document,
                reason,
            } => ExError::new(ExErrorKind::Parse)
                .with_path(path)
                .with_document(document)
                .with_message(reason),

            YmlDiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::NotText, "ERR_NOT_TEXT"),
            (ExErrorKind::Parse, "ERR_PARSE"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Parse)
            .with_op("load_documents")
            .with_path("a.yaml")
            .with_document(2)
            .with_message("did not find expected key");
        let text = err.to_string();
        assert_eq!(
            text,
            "[ERR_PARSE] in operation 'load_documents': did not find expected key (path: a.yaml) (document: 2)"
        );
    }

    #[test]
    fn test_serialization_maps_to_serialization_kind() {
        let err: ExError = YmlDiffError::Serialization {
            message: "key must be a string".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::Serialization);
        assert_eq!(err.to_string(), "[ERR_SERIALIZATION]: key must be a string");
    }
}
