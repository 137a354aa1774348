//! Color backends for report rendering.
//!
//! Render code only knows semantic colors; the backend decides how to style
//! the text. Styling wraps text and never changes it, so stripping escape
//! sequences from ANSI output gives the plain output byte for byte.

use crate::diff::model::ChangeKind;
use owo_colors::OwoColorize;

/// Semantic color meaning for report elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    /// Added content (green)
    Added,
    /// Removed content (red)
    Removed,
    /// Modified marker (yellow)
    Modified,
    /// Document headers and comments (blue)
    Header,
}

impl From<ChangeKind> for SemanticColor {
    fn from(kind: ChangeKind) -> Self {
        match kind {
            ChangeKind::Addition => SemanticColor::Added,
            ChangeKind::Deletion => SemanticColor::Removed,
            ChangeKind::Modification => SemanticColor::Modified,
        }
    }
}

/// A backend that decides how to render semantic colors.
pub trait ColorBackend {
    /// Append `text` to `out` with the given styling.
    fn write_styled(&self, out: &mut String, text: &str, color: SemanticColor);

    /// Return `text` styled, for values reused across several lines.
    fn styled(&self, text: &str, color: SemanticColor) -> String {
        let mut out = String::new();
        self.write_styled(&mut out, text, color);
        out
    }
}

/// Plain backend - no styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackend;

impl ColorBackend for PlainBackend {
    fn write_styled(&self, out: &mut String, text: &str, _color: SemanticColor) {
        out.push_str(text);
    }
}

/// ANSI backend - emits ANSI escape codes for terminal colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiBackend;

impl ColorBackend for AnsiBackend {
    fn write_styled(&self, out: &mut String, text: &str, color: SemanticColor) {
        let styled = match color {
            SemanticColor::Added => text.green().to_string(),
            SemanticColor::Removed => text.red().to_string(),
            SemanticColor::Modified => text.yellow().to_string(),
            SemanticColor::Header => text.blue().to_string(),
        };
        out.push_str(&styled);
    }
}
