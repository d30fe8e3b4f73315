// src/sim/mod.rs

//! The simulation session: grid state, update rule, and frame telemetry.
//!
//! A `Session` is exclusively owned by the frame loop. Each frame calls, in
//! order: [`Session::reconcile`] to track the viewport, [`Session::advance`]
//! to run the automaton, then [`Session::record_frame`] with the measured
//! elapsed time. The renderer reads the session in between, through the
//! read-only accessors.

pub mod engine;
pub mod grid;
pub mod history;

#[cfg(test)]
mod tests;

use std::mem;

use anyhow::Result;
use log::info;

use crate::sim::grid::Grid;
use crate::sim::history::History;

/// One simulation run: the cell grid, its scratch buffer, and telemetry.
#[derive(Debug)]
pub struct Session {
    front: Grid,
    scratch: Grid,
    history: History,
    generation: u64,
    last_frame_time: f64,
    avg_frame_time: f64,
    paused: bool,
}

impl Session {
    /// Creates a session with a randomized `width` x `height` grid.
    ///
    /// `history_capacity` sizes the frame-time ring and the growth increment
    /// of the full series; values of 10 or less are rejected.
    pub fn new(width: usize, height: usize, history_capacity: usize) -> Result<Self> {
        let history = History::new(history_capacity)?;
        Ok(Session {
            front: Grid::random(width, height),
            scratch: Grid::new(width, height),
            history,
            generation: 0,
            last_frame_time: 0.0,
            avg_frame_time: 0.0,
            paused: false,
        })
    }

    /// The current generation's grid.
    pub fn grid(&self) -> &Grid {
        &self.front
    }

    /// The frame-time recorder.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Generations simulated since start or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Elapsed time of the most recent frame, in seconds.
    pub fn last_frame_time(&self) -> f64 {
        self.last_frame_time
    }

    /// Running average frame time across recorded generations, in seconds.
    pub fn avg_frame_time(&self) -> f64 {
        self.avg_frame_time
    }

    /// Whether the simulation is paused.
    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Adopts a new logical grid size.
    ///
    /// A matching size is a no-op. Otherwise both grid buffers are resized:
    /// cells in the surviving region keep their state, newly exposed cells
    /// are freshly seeded.
    pub fn reconcile(&mut self, width: usize, height: usize) {
        if width == self.front.width() && height == self.front.height() {
            return;
        }
        info!(
            "grid resize: {}x{} -> {}x{}",
            self.front.width(),
            self.front.height(),
            width,
            height
        );
        self.front.resize_to(width, height);
        self.scratch.resize_to(width, height);
    }

    /// Runs one automaton step, unless paused.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }
        engine::step(&self.front, &mut self.scratch);
        mem::swap(&mut self.front, &mut self.scratch);
    }

    /// Accounts for a finished frame.
    ///
    /// Always updates `last_frame_time`. While paused nothing else moves;
    /// otherwise the sample lands in the history under the current
    /// generation index, the counter advances, and the running average is
    /// folded forward.
    pub fn record_frame(&mut self, elapsed: f64) {
        self.last_frame_time = elapsed;
        if self.paused {
            return;
        }
        self.history.record(self.generation, elapsed);
        self.generation += 1;
        self.avg_frame_time = (self.avg_frame_time * (self.generation - 1) as f64 + elapsed)
            / self.generation as f64;
    }

    /// Restarts the run in place: reseeded grid, fresh history at the
    /// original capacity, counters zeroed. Grid dimensions and the pause
    /// flag are kept.
    pub fn reset(&mut self) {
        info!("session reset at generation {}", self.generation);
        self.front.randomize();
        self.history.reset();
        self.generation = 0;
        self.last_frame_time = 0.0;
        self.avg_frame_time = 0.0;
    }
}
