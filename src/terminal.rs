use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use log::warn;

/// Owns the terminal while the game runs. Raw mode, the alternate screen,
/// mouse capture and the hidden cursor are undone on drop, including when
/// setup fails halfway.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self {
            out,
            raw_mode: true,
        };
        guard.prepare()?;
        Ok(guard)
    }

    fn prepare(&mut self) -> io::Result<()> {
        self.out.execute(EnterAlternateScreen)?;
        self.out.execute(EnableMouseCapture)?;
        self.out.execute(Hide)?;
        Ok(())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        // Keep going on failure so later steps still get a chance.
        if let Err(e) = self.out.execute(Show) {
            warn!("showing the cursor: {}", e);
        }
        if let Err(e) = self.out.execute(DisableMouseCapture) {
            warn!("disabling mouse capture: {}", e);
        }
        if let Err(e) = self.out.execute(LeaveAlternateScreen) {
            warn!("leaving the alternate screen: {}", e);
        }
        if self.raw_mode {
            if let Err(e) = terminal::disable_raw_mode() {
                warn!("disabling raw mode: {}", e);
            }
        }
    }
}
