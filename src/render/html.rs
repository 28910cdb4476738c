//! HTML output
//!
//! Segment content is already escaped when it reaches this module, so the
//! highlighted view is plain concatenation. Everything else that comes from
//! the service or the user goes through [`MarkupEscaper`] here.

use std::fmt::Write;

use super::{NO_TEXT_PLACEHOLDER, match_count_label};
use crate::escape::{Escaper, MarkupEscaper};
use crate::projector::Projection;
use crate::report::MatchReport;
use crate::service::Flag;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
.highlighted{white-space:pre-wrap;font-family:monospace;border:1px solid #ccc;padding:1em}\
mark{background:#ffeb3b}\
.placeholder{color:#888;font-style:italic}\
.error{color:#b00020}\
.match-text,.group-text{font-family:monospace;background:#eee}";

/// Highlighted text: plain segments as-is, matches wrapped in `<mark>`
pub fn render_highlighted(projection: &Projection) -> String {
    if projection.is_empty() {
        return format!("<p class=\"placeholder\">{}</p>", NO_TEXT_PLACEHOLDER);
    }

    let mut out = String::new();
    for segment in projection.segments() {
        if segment.is_match {
            out.push_str("<mark>");
            out.push_str(&segment.content);
            out.push_str("</mark>");
        } else {
            out.push_str(&segment.content);
        }
    }
    out
}

/// Match count followed by one list item per match
pub fn render_results(report: &MatchReport) -> String {
    let escaper = MarkupEscaper;
    let mut out = format!("<p><strong>{}</strong></p>", match_count_label(report.count));
    if report.is_empty() {
        return out;
    }

    out.push_str("<ul>");
    for entry in report.entries() {
        let _ = write!(
            out,
            "<li><strong>Full match:</strong> <span class=\"match-text\">{}</span><br>\
             <strong>Position:</strong> {}",
            escaper.escape_str(entry.matched_text),
            entry.position
        );

        if !entry.groups.is_empty() {
            out.push_str("<br><strong>Groups:</strong><ul>");
            for group in &entry.groups {
                let _ = write!(
                    out,
                    "<li>Group {}: <span class=\"group-text\">{}</span></li>",
                    group.number,
                    escaper.escape(group.text)
                );
            }
            out.push_str("</ul>");
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

/// Error message block
pub fn render_error(message: &str) -> String {
    format!(
        "<p class=\"error\">Error: {}</p>",
        MarkupEscaper.escape_str(message)
    )
}

/// Results and highlighted text, without the surrounding document
pub fn render_fragment(report: &MatchReport, projection: &Projection) -> String {
    format!(
        "<div id=\"resultsList\">{}</div>\n<div id=\"highlightedTextOutput\" class=\"highlighted\">{}</div>",
        render_results(report),
        render_highlighted(projection)
    )
}

/// Standalone HTML page describing one debug run
pub fn render_page(
    pattern: &str,
    flags: &[Flag],
    report: &MatchReport,
    projection: &Projection,
) -> String {
    let escaper = MarkupEscaper;
    let flags = if flags.is_empty() {
        "none".to_string()
    } else {
        flags
            .iter()
            .map(Flag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>regex-lens</title>\n<style>{}</style>\n</head>\n<body>\n\
         <p><strong>Pattern:</strong> <code>{}</code></p>\n\
         <p><strong>Flags:</strong> {}</p>\n{}\n</body>\n</html>\n",
        STYLE,
        escaper.escape_str(pattern),
        flags,
        render_fragment(report, projection)
    )
}

/// Standalone HTML page for a failed run
pub fn render_error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>regex-lens</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        STYLE,
        render_error(message)
    )
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod html_tests;
