//! Text escaping for rendering surfaces
//!
//! Segment content is escaped once, at projection time, so a projection can be
//! concatenated straight into its target surface. Markup output delegates to an
//! HTML text-node encoder; text-only surfaces use the verbatim escaper.

/// Renders arbitrary text as literal content for one rendering surface.
pub trait Escaper {
    /// Escape `value` for the surface. `None` stands for a non-text value and
    /// always yields an empty string.
    fn escape(&self, value: Option<&str>) -> String;

    /// Shorthand for escaping a value that is known to be text.
    fn escape_str(&self, value: &str) -> String {
        self.escape(Some(value))
    }
}

/// Escapes text as the content of an HTML text node.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupEscaper;

impl Escaper for MarkupEscaper {
    fn escape(&self, value: Option<&str>) -> String {
        match value {
            Some(text) => html_escape::encode_text(text).into_owned(),
            None => String::new(),
        }
    }
}

/// Leaves text untouched, for surfaces that never interpret their content
/// (ratatui spans, JSON values).
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimEscaper;

impl Escaper for VerbatimEscaper {
    fn escape(&self, value: Option<&str>) -> String {
        value.map(str::to_owned).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod escape_tests;
