//! Normalized match report
//!
//! Sorts the raw matches by position for display. Overlapping spans are kept
//! as the service returned them; resolving overlaps is the projector's job.

use serde::Serialize;

use crate::span::MatchSpan;

/// Matches sorted by start offset, plus their count
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MatchReport {
    pub count: usize,
    pub spans: Vec<MatchSpan>,
}

impl MatchReport {
    /// Build a report from matches in any order.
    ///
    /// The sort is stable, so spans sharing a start offset keep the order the
    /// service returned them in. Malformed spans are passed through unchanged.
    pub fn build(raw_matches: &[MatchSpan]) -> Self {
        let mut spans = raw_matches.to_vec();
        spans.sort_by_key(|span| span.start);

        Self {
            count: spans.len(),
            spans,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Display entries, one per span, numbered from 1
    pub fn entries(&self) -> impl Iterator<Item = ReportEntry<'_>> {
        self.spans
            .iter()
            .enumerate()
            .map(|(i, span)| ReportEntry::new(i + 1, span))
    }
}

/// Human-readable view of one span in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry<'a> {
    pub number: usize,
    pub matched_text: &'a str,
    pub position: String,
    pub groups: Vec<GroupEntry<'a>>,
}

impl<'a> ReportEntry<'a> {
    fn new(number: usize, span: &'a MatchSpan) -> Self {
        let groups = span
            .groups
            .iter()
            .enumerate()
            .map(|(i, group)| GroupEntry {
                number: i + 1,
                text: group.as_deref(),
            })
            .collect();

        Self {
            number,
            matched_text: &span.matched_text,
            position: span.position_label(),
            groups,
        }
    }
}

/// One capture group; `text` is `None` when the group did not participate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupEntry<'a> {
    pub number: usize,
    pub text: Option<&'a str>,
}

impl GroupEntry<'_> {
    pub const ABSENT_LABEL: &'static str = "(no match)";

    /// Group text, or the absent label for a non-participating group
    pub fn display_text(&self) -> &str {
        self.text.unwrap_or(Self::ABSENT_LABEL)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
