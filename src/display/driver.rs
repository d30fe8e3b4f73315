// src/display/driver.rs

//! Owns the terminal for the lifetime of the run.
//!
//! Raw mode, the alternate screen, and the hidden cursor are claimed in
//! `new`; `Drop` restores the terminal even when the frame loop errors out.
//! There is exactly one terminal, so this is a concrete struct rather than
//! a driver trait.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Handle on the terminal: lifecycle, viewport size, and input polling.
pub struct TerminalDriver {
    out: Stdout,
}

impl TerminalDriver {
    /// Puts the terminal into raw, alternate-screen, hidden-cursor state.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("could not enable raw mode")?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)
            .context("could not enter the alternate screen")?;
        Ok(TerminalDriver { out })
    }

    /// Current viewport size in character cells, `(columns, rows)`.
    pub fn viewport(&self) -> Result<(u16, u16)> {
        terminal::size().context("could not read the terminal size")
    }

    /// Writer for queued draw commands.
    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }

    /// Waits up to `timeout` for a key press.
    ///
    /// This doubles as the frame delay: when no key arrives the full
    /// timeout has elapsed. Non-key events are drained and dropped; a
    /// resize shows up through `viewport` on the next frame anyway.
    pub fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(timeout).context("could not poll for input")? {
            return Ok(None);
        }
        match event::read().context("could not read input")? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        // Best-effort restore; there is nowhere left to report failure.
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
