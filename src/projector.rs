//! Highlight projection
//!
//! Walks the text and the position-sorted matches once, left to right, and
//! cuts the text into highlighted and plain segments ready for rendering.
//!
//! Overlapping matches are resolved last-write-wins by start order: a match
//! starting before the cursor is still emitted in full and the previous
//! segment is not retracted, so overlapping regions appear twice. Matched
//! text is taken verbatim from the service rather than re-sliced from the
//! offsets.

use crate::escape::Escaper;
use crate::span::{CharIndex, MatchSpan};

/// One contiguous chunk of escaped, render-ready content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub content: String,
    pub is_match: bool,
}

impl Segment {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_match: false,
        }
    }

    pub fn highlighted(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_match: true,
        }
    }
}

/// Ordered segments produced for one text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Projection {
    segments: Vec<Segment>,
    cursor: usize,
}

impl Projection {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Char offset the walk stopped at after the last match
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when there was no text to project
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn match_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_match)
    }

    /// Concatenated content of every segment
    pub fn joined(&self) -> String {
        self.segments.iter().map(|s| s.content.as_str()).collect()
    }
}

/// Project `text` into segments using matches sorted by start offset.
///
/// Empty text yields an empty projection; the caller decides how to show the
/// absence of text. Offsets outside the text are clamped and never panic.
pub fn project<E: Escaper + ?Sized>(
    text: &str,
    sorted_spans: &[MatchSpan],
    escaper: &E,
) -> Projection {
    if text.is_empty() {
        return Projection::default();
    }

    let index = CharIndex::new(text);
    let mut segments = Vec::with_capacity(sorted_spans.len() * 2 + 1);
    let mut last_index = 0;

    for span in sorted_spans {
        if span.start > last_index {
            let gap = index.slice(last_index, span.start);
            if !gap.is_empty() {
                segments.push(Segment::plain(escaper.escape_str(gap)));
            }
        }

        segments.push(Segment::highlighted(escaper.escape_str(&span.matched_text)));
        last_index = last_index.max(span.end);
    }

    if last_index < index.char_len() {
        segments.push(Segment::plain(escaper.escape_str(index.slice_from(last_index))));
    }

    Projection {
        segments,
        cursor: last_index,
    }
}

/// Indices of spans whose matched text differs from `text[start..end]`.
///
/// Such spans still render their matched text; a mismatch usually means the
/// service counted offsets in different units than the text being shown.
pub fn misaligned_spans(text: &str, spans: &[MatchSpan]) -> Vec<usize> {
    let index = CharIndex::new(text);
    let misaligned: Vec<usize> = spans
        .iter()
        .enumerate()
        .filter(|(_, span)| !span.agrees_with(&index))
        .map(|(i, _)| i)
        .collect();

    for &i in &misaligned {
        let span = &spans[i];
        log::warn!(
            "Match {} at {} does not agree with the text at its offsets",
            i + 1,
            span.position_label()
        );
    }

    misaligned
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod projector_tests;
