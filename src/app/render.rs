use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, Focus};
use crate::render::terminal::report_lines;

const HELP_TEXT: &str = " Tab: switch pane  j/k: scroll  g: top  q: quit ";

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Header, body, help line
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_header(frame, layout[0]);

        match &self.error {
            Some(message) => self.render_error(frame, layout[1], message),
            None => {
                let panes =
                    Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                        .split(layout[1]);
                self.render_text_pane(frame, panes[0]);
                self.render_matches_pane(frame, panes[1]);
            }
        }

        frame.render_widget(
            Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
            layout[2],
        );
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let flags = if self.flags.is_empty() {
            "none".to_string()
        } else {
            self.flags
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let header = Line::from(vec![
            Span::styled(" Pattern: ", Style::default().fg(Color::Gray)),
            Span::styled(
                self.pattern.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Flags: ", Style::default().fg(Color::Gray)),
            Span::raw(flags),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn pane_block(&self, title: String, pane: Focus) -> Block<'static> {
        // Set border color based on focus
        let border_color = if self.focus == pane {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color))
    }

    fn render_text_pane(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.text_lines.clone())
            .block(self.pane_block(" Text ".to_string(), Focus::TextPane))
            .wrap(Wrap { trim: false })
            .scroll((self.text_scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_matches_pane(&self, frame: &mut Frame, area: Rect) {
        // Leave room for the borders and the "#N [s-e] " prefix
        let text_width = (area.width as usize).saturating_sub(16);
        let title = format!(" Matches ({}) ", self.report.count);

        let paragraph = Paragraph::new(report_lines(&self.report, text_width))
            .block(self.pane_block(title, Focus::MatchesPane))
            .scroll((self.matches_scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Error ")
            .border_style(Style::default().fg(Color::Red));
        let paragraph = Paragraph::new(format!("Error: {}", message))
            .style(Style::default().fg(Color::Red))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
