use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::App;

const PAGE_SIZE: u16 = 10;

impl App {
    /// Handle a key event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (avoid duplicates)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('d') => self.scroll_down(PAGE_SIZE),
                KeyCode::Char('u') => self.scroll_up(PAGE_SIZE),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(PAGE_SIZE),
            KeyCode::PageUp => self.scroll_up(PAGE_SIZE),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            _ => {}
        }
    }
}
