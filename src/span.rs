//! Match spans as returned by the matching service

use serde::{Deserialize, Serialize};

/// One match found by the matching service.
///
/// Offsets count Unicode scalar values (chars), the indexing the service uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Full matched text, displayed verbatim
    #[serde(rename = "match")]
    pub matched_text: String,
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
    /// Capture groups in declaration order; `None` for a group that did not participate
    #[serde(default)]
    pub groups: Vec<Option<String>>,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize, matched_text: impl Into<String>) -> Self {
        Self {
            matched_text: matched_text.into(),
            start,
            end,
            groups: Vec::new(),
        }
    }

    pub fn with_groups(mut self, groups: Vec<Option<String>>) -> Self {
        self.groups = groups;
        self
    }

    /// Position label in the form `start-end`
    pub fn position_label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }

    /// Whether `matched_text` equals the text the offsets point at
    pub fn agrees_with(&self, index: &CharIndex<'_>) -> bool {
        index.slice(self.start, self.end) == self.matched_text
    }
}

/// Char-offset to byte-offset table for one text.
///
/// Built once per text so that slicing by char offsets costs O(1) per span.
#[derive(Debug, Clone)]
pub struct CharIndex<'a> {
    text: &'a str,
    // Byte offset of every char, plus `text.len()` as the final entry
    bytes: Vec<usize>,
}

impl<'a> CharIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut bytes: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
        bytes.push(text.len());
        Self { text, bytes }
    }

    /// Number of chars in the text
    pub fn char_len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Slice by char offsets `[start, end)`.
    ///
    /// Offsets past the end are clamped and an inverted range yields an empty slice.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        if start >= end {
            return "";
        }
        &self.text[self.byte_offset(start)..self.byte_offset(end)]
    }

    /// Slice from char offset `start` to the end of the text
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.text[self.byte_offset(start)..]
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.bytes
            .get(char_offset)
            .copied()
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod span_tests;
