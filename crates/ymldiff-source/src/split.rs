//! Splitting a multi-document stream into per-document segments.
//!
//! Splitting is line based: a `---` line at column 0 starts a document and a
//! `...` line ends one. Directive lines (`%YAML`, `%TAG`) are dropped.

/// Source text of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Text of the document without its start marker
    pub text: String,
    /// 1-based line of the input on which `text` begins
    pub first_line: usize,
    /// Opened by a `---` marker
    pub explicit: bool,
}

impl Segment {
    fn new(first_line: usize, explicit: bool) -> Self {
        Self {
            text: String::new(),
            first_line,
            explicit,
        }
    }

    /// Whether the segment holds any YAML node.
    ///
    /// Blank lines and comment lines alone do not make a document.
    pub fn has_content(&self) -> bool {
        self.text.lines().any(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
    }

    /// Whether the segment counts as a document.
    ///
    /// A `---` marker always opens one, empty or not.
    pub fn is_document(&self) -> bool {
        self.explicit || self.has_content()
    }

    /// Text padded with blank lines so parser positions match the input.
    pub fn positioned_text(&self) -> String {
        let mut text = "\n".repeat(self.first_line.saturating_sub(1));
        text.push_str(&self.text);
        text
    }
}

/// Text after a `---` marker, or `None` when the line is not a marker.
fn document_start(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("---")?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest.trim_start()),
        Some(_) => None,
    }
}

fn is_document_end(line: &str) -> bool {
    match line.strip_prefix("...") {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

fn is_directive(line: &str) -> bool {
    line.starts_with('%')
}

/// Split `text` into raw segments, one per marker-delimited region.
///
/// Every region is returned, including ones without content; callers use
/// [`Segment::is_document`] to tell documents from comment-only regions.
pub fn split_documents(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = Segment::new(1, false);

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if let Some(rest) = document_start(line) {
            segments.push(std::mem::replace(&mut current, Segment::new(line_no, true)));
            if !rest.is_empty() {
                current.text.push_str(rest);
                current.text.push('\n');
            }
        } else if is_document_end(line) {
            segments.push(std::mem::replace(&mut current, Segment::new(line_no + 1, false)));
        } else if is_directive(line) {
            tracing::debug!(line = line_no, "skipping directive");
        } else {
            if current.text.is_empty() {
                current.first_line = line_no;
            }
            current.text.push_str(line);
            current.text.push('\n');
        }
    }
    segments.push(current);

    segments
}
