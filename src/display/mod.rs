// src/display/mod.rs

//! Terminal display layer: lifecycle, view state, and drawing.
//!
//! Nothing here carries simulation invariants; this layer reads the session
//! through its accessors and puts characters on the screen. Its one piece of
//! arithmetic the simulation depends on is [`logical_grid_size`], which maps
//! a viewport to grid dimensions for the active display mode.

pub mod driver;
pub mod renderer;

use bitflags::bitflags;

use crate::config::AppearanceConfig;

bitflags! {
    /// Runtime display toggles.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ViewFlags: u8 {
        /// Draw the info panel at the bottom.
        const SHOW_INFO = 1 << 0;
        /// Draw the frame-time graphs inside the info panel.
        const SHOW_HISTORY = 1 << 1;
        /// Color live cells by survival age.
        const USE_COLORS = 1 << 2;
        /// Pack two grid rows into each text row with half-block glyphs.
        const HALF_BLOCKS = 1 << 3;
    }
}

impl ViewFlags {
    /// Initial flags from the startup configuration.
    pub fn from_config(appearance: &AppearanceConfig) -> Self {
        let mut flags = ViewFlags::empty();
        flags.set(ViewFlags::SHOW_INFO, appearance.show_info);
        flags.set(ViewFlags::SHOW_HISTORY, appearance.show_history);
        flags.set(ViewFlags::USE_COLORS, appearance.use_colors);
        flags.set(ViewFlags::HALF_BLOCKS, appearance.half_blocks);
        flags
    }
}

/// Logical grid size for a terminal viewport.
///
/// Normal mode draws one cell as two columns ("██"), so the grid is half as
/// wide as the viewport. Half-block mode draws two cells per text row, so
/// the grid is twice as tall. A degenerate viewport simply yields a
/// zero-sized grid.
pub fn logical_grid_size(viewport: (u16, u16), flags: ViewFlags) -> (usize, usize) {
    let (cols, rows) = (viewport.0 as usize, viewport.1 as usize);
    if flags.contains(ViewFlags::HALF_BLOCKS) {
        (cols, rows * 2)
    } else {
        (cols / 2, rows)
    }
}
