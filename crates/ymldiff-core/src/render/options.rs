//! Rendering options.

/// Display switches for the text report.
///
/// Passed explicitly to every render function; the renderer reads no
/// process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colors around markers, headers and modified strings
    pub color: bool,
    /// Print each document's comments below its header
    pub show_comments: bool,
    /// Print `--- # YAML Document: i/N` instead of a bare `---`
    pub doc_separator_comments: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            show_comments: true,
            doc_separator_comments: true,
        }
    }
}

impl RenderOptions {
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_comments(mut self, show_comments: bool) -> Self {
        self.show_comments = show_comments;
        self
    }

    pub fn with_doc_separator_comments(mut self, enabled: bool) -> Self {
        self.doc_separator_comments = enabled;
        self
    }
}
