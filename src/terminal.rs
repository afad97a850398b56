//! Raw-mode session for the interactive quiz.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the quiz is on screen.
///
/// Raw mode and the alternate screen are left when the session is closed or
/// dropped, including when the event loop returns early with an error.
pub struct Session {
    terminal: QuizTerminal,
    active: bool,
}

impl Session {
    pub fn open() -> io::Result<Self> {
        restore_on_panic();
        enable_raw_mode()?;
        if let Err(err) = io::stdout().execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(io::stdout()))?,
            active: true,
        })
    }

    /// Hand the terminal back, reporting a failed teardown.
    pub fn close(mut self) -> io::Result<()> {
        self.active = false;
        leave()
    }
}

impl Deref for Session {
    type Target = QuizTerminal;

    fn deref(&self) -> &QuizTerminal {
        &self.terminal
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut QuizTerminal {
        &mut self.terminal
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = leave() {
                warn!(error = %err, "failed to restore terminal");
            }
        }
    }
}

fn leave() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// The panic message would otherwise land on the alternate screen.
fn restore_on_panic() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave();
        previous(info);
    }));
}
