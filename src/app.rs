// src/app.rs

//! The application: one session, one terminal, one frame loop.
//!
//! Every frame runs the same fixed sequence: reconcile the grid with the
//! viewport, advance the automaton, draw, record the elapsed time, then
//! poll for input. The input poll doubles as the inter-frame delay.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};

use crate::config::Config;
use crate::display::{self, driver::TerminalDriver, renderer, ViewFlags};
use crate::keys::{self, UserAction};
use crate::sim::Session;

/// Whether the frame loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Exiting,
}

/// The running application.
pub struct App {
    session: Session,
    driver: TerminalDriver,
    flags: ViewFlags,
    frame_delay: Duration,
    panel_height: u16,
}

impl App {
    /// Claims the terminal and builds a session sized to it.
    pub fn new(config: &Config) -> Result<Self> {
        let driver = TerminalDriver::new()?;
        let flags = ViewFlags::from_config(&config.appearance);
        let viewport = driver.viewport()?;
        let (width, height) = display::logical_grid_size(viewport, flags);
        let session = Session::new(width, height, config.behavior.history_capacity)?;
        info!(
            "session started: {}x{} grid in a {}x{} viewport",
            width, height, viewport.0, viewport.1
        );
        Ok(App {
            session,
            driver,
            flags,
            frame_delay: Duration::from_millis(config.behavior.frame_delay_ms),
            panel_height: config.appearance.info_panel_height,
        })
    }

    /// Runs frames until the user quits.
    pub fn run(&mut self) -> Result<()> {
        while self.frame()? == Status::Running {}
        info!("exiting");
        Ok(())
    }

    fn frame(&mut self) -> Result<Status> {
        let start = Instant::now();

        let viewport = self.driver.viewport()?;
        let (width, height) = display::logical_grid_size(viewport, self.flags);
        self.session.reconcile(width, height);
        self.session.advance();

        renderer::draw(
            self.driver.out(),
            &self.session,
            self.flags,
            viewport,
            self.panel_height,
        )?;

        // The frame time covers simulation and drawing, not the input wait.
        self.session.record_frame(start.elapsed().as_secs_f64());

        if let Some(key) = self.driver.poll_key(self.frame_delay)? {
            if let Some(action) = keys::action_for(&key) {
                return Ok(self.apply(action));
            }
        }
        Ok(Status::Running)
    }

    fn apply(&mut self, action: UserAction) -> Status {
        debug!("user action: {action:?}");
        match action {
            UserAction::Quit => return Status::Exiting,
            UserAction::TogglePause => self.session.toggle_pause(),
            UserAction::ToggleInfo => self.flags.toggle(ViewFlags::SHOW_INFO),
            UserAction::ToggleColors => self.flags.toggle(ViewFlags::USE_COLORS),
            UserAction::ToggleHistory => self.flags.toggle(ViewFlags::SHOW_HISTORY),
            UserAction::ToggleHalfBlocks => self.flags.toggle(ViewFlags::HALF_BLOCKS),
            UserAction::Reset => self.session.reset(),
        }
        Status::Running
    }
}
