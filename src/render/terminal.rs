use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use super::{NO_TEXT_PLACEHOLDER, match_count_label};
use crate::projector::Projection;
use crate::report::MatchReport;

pub fn match_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Yellow)
}

fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Shown in place of a zero-length match so its position stays visible
pub const EMPTY_MATCH_MARKER: &str = "\u{258f}";

/// Split the projection into display lines, styling match segments.
///
/// A segment spanning a newline is cut into one span per line, keeping its
/// style. Carriage returns are dropped so CRLF text renders like LF text.
pub fn highlighted_lines(projection: &Projection) -> Vec<Line<'static>> {
    if projection.is_empty() {
        return vec![Line::from(Span::styled(
            NO_TEXT_PLACEHOLDER,
            placeholder_style(),
        ))];
    }

    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for segment in projection.segments() {
        let style = if segment.is_match {
            match_style()
        } else {
            Style::default()
        };

        if segment.is_match && segment.content.is_empty() {
            current.push(Span::styled(EMPTY_MATCH_MARKER, style));
            continue;
        }

        let content = segment.content.replace('\r', "");
        let mut parts = content.split('\n');
        if let Some(first) = parts.next()
            && !first.is_empty()
        {
            current.push(Span::styled(first.to_string(), style));
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines.push(Line::from(current));

    lines
}

/// Match list lines: one header per match plus one line per capture group.
///
/// Match and group text is truncated to `max_width` display columns.
pub fn report_lines(report: &MatchReport, max_width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        match_count_label(report.count),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for entry in report.entries() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("#{} ", entry.number),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("[{}] ", entry.position),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(truncate_to_width(entry.matched_text, max_width), match_style()),
        ]));

        for group in &entry.groups {
            let text_style = if group.text.is_some() {
                Style::default()
            } else {
                placeholder_style()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    Group {}: ", group.number),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(truncate_to_width(group.display_text(), max_width), text_style),
            ]));
        }
    }

    lines
}

/// Flatten control characters and cut `text` to at most `max_width` columns,
/// marking a cut with a trailing ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    let limit = max_width.saturating_sub(1);

    for (i, ch) in text.chars().enumerate() {
        let ch = if ch.is_control() { ' ' } else { ch };
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > limit {
            let rest_width: usize = text
                .chars()
                .skip(i)
                .map(|c| if c.is_control() { 1 } else { c.width().unwrap_or(0) })
                .sum();
            if width + rest_width <= max_width {
                out.extend(
                    text.chars()
                        .skip(i)
                        .map(|c| if c.is_control() { ' ' } else { c }),
                );
            } else {
                out.push('…');
            }
            return out;
        }
        out.push(ch);
        width += ch_width;
    }

    out
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod terminal_tests;
