//! Interactive viewer
//!
//! Full-screen view of one debug run: the highlighted text on the left and
//! the match list on the right.

use std::io;

use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

mod events;
mod render;
mod state;

pub use state::{App, Focus};

/// Show `app` until the user quits. Terminal setup and restore happen here.
pub fn run(mut app: App) -> io::Result<()> {
    let terminal = ratatui::init();
    let result = event_loop(terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(mut terminal: DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
