use ratatui::text::Line;

use crate::projector::Projection;
use crate::render::terminal::highlighted_lines;
use crate::report::MatchReport;
use crate::service::Flag;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TextPane,
    MatchesPane,
}

/// Viewer state for one debug run
pub struct App {
    pub pattern: String,
    pub flags: Vec<Flag>,
    pub report: MatchReport,
    pub text_lines: Vec<Line<'static>>,
    pub error: Option<String>,
    pub focus: Focus,
    pub text_scroll: u16,
    pub matches_scroll: u16,
    pub should_quit: bool,
}

impl App {
    /// Create a viewer for a successful run
    pub fn new(pattern: &str, flags: &[Flag], report: MatchReport, projection: &Projection) -> Self {
        Self {
            pattern: pattern.to_string(),
            flags: flags.to_vec(),
            report,
            text_lines: highlighted_lines(projection),
            error: None,
            focus: Focus::TextPane,
            text_scroll: 0,
            matches_scroll: 0,
            should_quit: false,
        }
    }

    /// Create a viewer that only shows an error
    pub fn with_error(pattern: &str, flags: &[Flag], message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            text_lines: Vec::new(),
            ..Self::new(pattern, flags, MatchReport::default(), &Projection::default())
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::TextPane => Focus::MatchesPane,
            Focus::MatchesPane => Focus::TextPane,
        };
    }

    /// Number of lines the matches pane holds
    pub fn matches_line_count(&self) -> usize {
        1 + self
            .report
            .spans
            .iter()
            .map(|span| 1 + span.groups.len())
            .sum::<usize>()
    }

    pub fn scroll_down(&mut self, amount: u16) {
        let (scroll, total) = self.focused_scroll();
        let max = total.saturating_sub(1).min(u16::MAX as usize) as u16;
        *scroll = scroll.saturating_add(amount).min(max);
    }

    pub fn scroll_up(&mut self, amount: u16) {
        let (scroll, _) = self.focused_scroll();
        *scroll = scroll.saturating_sub(amount);
    }

    pub fn scroll_to_top(&mut self) {
        let (scroll, _) = self.focused_scroll();
        *scroll = 0;
    }

    fn focused_scroll(&mut self) -> (&mut u16, usize) {
        match self.focus {
            Focus::TextPane => (&mut self.text_scroll, self.text_lines.len()),
            Focus::MatchesPane => {
                let total = self.matches_line_count();
                (&mut self.matches_scroll, total)
            }
        }
    }
}
