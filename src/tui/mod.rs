//! Interactive terminal browser over a loaded prompt collection
mod app;
mod events;
mod layout;
mod rendering;
mod timestamps;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
pub use app::App;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
pub use events::{Action, Focus, key_to_action};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
pub use rendering::list_preview;
pub use timestamps::format_timestamp;
use tracing::debug;

use crate::models::Prompt;
use crate::view::ViewModel;

/// Raw mode plus alternate screen, undone on drop
struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalManager {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

// Also runs when the event loop returns an error or panics
impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive TUI until the user quits
pub fn run_interactive(prompts: Vec<Prompt>) -> Result<()> {
    let mut app = App::new(ViewModel::new(prompts));

    debug!(count = app.view().total_count(), "Starting interactive mode");
    let mut manager = TerminalManager::enter()?;
    app.run(&mut manager.terminal)
}
