// src/display/renderer.rs

//! Draws the field, the info panel, and the frame-time graphs.
//!
//! All output is queued and flushed once per frame.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use super::ViewFlags;
use crate::cell::Cell;
use crate::sim::history::downsample;
use crate::sim::Session;

const CELL_BLOCK: &str = "██";
const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";
const FULL_BLOCK: &str = "█";

/// Left edge of the first graph inside the info panel.
const GRAPH_LEFT: usize = 40;
/// Columns taken by the numeric scale in front of each graph's dots.
const GRAPH_SCALE_WIDTH: usize = 8;
/// Gap between the two graphs.
const GRAPH_GAP: usize = 10;
/// Narrower than this and a graph is not worth starting.
const MIN_GRAPH_WIDTH: usize = 15;

/// Draws one complete frame.
pub fn draw(
    out: &mut impl Write,
    session: &Session,
    flags: ViewFlags,
    viewport: (u16, u16),
    panel_height: u16,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    draw_field(out, session, flags)?;
    if flags.contains(ViewFlags::SHOW_INFO) && viewport.1 >= panel_height {
        draw_info_panel(out, session, flags, viewport, panel_height)?;
    }
    out.flush()
}

fn draw_field(out: &mut impl Write, session: &Session, flags: ViewFlags) -> io::Result<()> {
    let grid = session.grid();
    if flags.contains(ViewFlags::HALF_BLOCKS) {
        // Two grid rows per text row; colors are off in this mode.
        for text_row in 0..grid.height() / 2 {
            for x in 0..grid.width() {
                let top = grid[(x, text_row * 2)].alive;
                let bottom = grid[(x, text_row * 2 + 1)].alive;
                let glyph = match (top, bottom) {
                    (false, false) => continue,
                    (true, true) => FULL_BLOCK,
                    (true, false) => UPPER_HALF,
                    (false, true) => LOWER_HALF,
                };
                queue!(out, MoveTo(x as u16, text_row as u16), Print(glyph))?;
            }
        }
    } else {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let cell = &grid[(x, y)];
                if !cell.alive {
                    continue;
                }
                let position = MoveTo((x * 2) as u16, y as u16);
                if flags.contains(ViewFlags::USE_COLORS) {
                    queue!(
                        out,
                        SetForegroundColor(age_color(cell)),
                        position,
                        Print(CELL_BLOCK),
                        ResetColor
                    )?;
                } else {
                    queue!(out, position, Print(CELL_BLOCK))?;
                }
            }
        }
    }
    Ok(())
}

/// Cells shift color as they survive longer.
fn age_color(cell: &Cell) -> Color {
    match cell.age {
        0 => Color::Red,
        1..=9 => Color::Green,
        10..=29 => Color::Blue,
        _ => Color::Yellow,
    }
}

fn draw_info_panel(
    out: &mut impl Write,
    session: &Session,
    flags: ViewFlags,
    viewport: (u16, u16),
    panel_height: u16,
) -> io::Result<()> {
    let (cols, rows) = viewport;
    if cols < 2 || panel_height < 4 {
        return Ok(());
    }
    let top = rows - panel_height;
    draw_panel_border(out, top, cols, panel_height)?;

    let grid = session.grid();
    let stats = [
        "[i]".to_string(),
        "Game of Life".to_string(),
        format!(
            "Grid: {}x{} ({})",
            grid.width(),
            grid.height(),
            grid.width() * grid.height()
        ),
        format!("Last frame time   : {:.6} sec", session.last_frame_time()),
        format!("Average frame time: {:.6} sec", session.avg_frame_time()),
        format!("Generation: {}", session.generation()),
    ];
    for (offset, text) in stats.iter().enumerate() {
        queue!(out, MoveTo(1, top + offset as u16), Print(text))?;
    }
    queue!(
        out,
        MoveTo(1, top + panel_height - 3),
        Print("[q]uit [r]eset [p]ause")
    )?;
    queue!(
        out,
        MoveTo(1, top + panel_height - 2),
        Print("[c]olors [h]istory [2]mode")
    )?;

    if flags.contains(ViewFlags::SHOW_HISTORY) {
        draw_graphs(out, session, viewport, panel_height)?;
    }
    Ok(())
}

fn draw_panel_border(out: &mut impl Write, top: u16, cols: u16, height: u16) -> io::Result<()> {
    let horizontal = "─".repeat(cols as usize - 2);
    queue!(out, MoveTo(0, top), Print(format!("┌{horizontal}┐")))?;
    for row in 1..height - 1 {
        queue!(
            out,
            MoveTo(0, top + row),
            Print("│"),
            MoveTo(cols - 1, top + row),
            Print("│")
        )?;
    }
    queue!(
        out,
        MoveTo(0, top + height - 1),
        Print(format!("└{horizontal}┘"))
    )?;
    Ok(())
}

/// Draws the recent-frames graph and the full-history graph side by side.
/// Whatever does not fit the viewport width is skipped, second graph first.
fn draw_graphs(
    out: &mut impl Write,
    session: &Session,
    viewport: (u16, u16),
    panel_height: u16,
) -> io::Result<()> {
    let graph_height = panel_height - 2;
    let history = session.history();
    let width = history.ring().capacity();

    let recent = history.ring().in_order(session.generation());
    let full = downsample(history.log().samples(), width);

    let top = viewport.1 - panel_height + 1;
    // Layout in usize; positions are cast only after the fits-check.
    let mut left = GRAPH_LEFT;
    for series in [&recent, &full] {
        if left + MIN_GRAPH_WIDTH >= viewport.0 as usize {
            break;
        }
        draw_graph(out, series, left as u16, top, graph_height, viewport.0)?;
        left += width + GRAPH_GAP;
    }
    Ok(())
}

/// Dot-plots `series`, min/max-scaled onto `height` rows, with a numeric
/// scale column on the left. Dots past the viewport's right edge are cut.
///
/// A flat series has zero range; the scale divides to NaN and no dot
/// lands, leaving only the scale column. The next differing sample brings
/// the dots back.
fn draw_graph(
    out: &mut impl Write,
    series: &[f64],
    left: u16,
    top: u16,
    height: u16,
    cols: u16,
) -> io::Result<()> {
    let mut min = series[0];
    let mut max = series[0];
    for &value in series {
        min = min.min(value);
        max = max.max(value);
    }
    let scale = (max - min) / f64::from(height);

    for row in 0..height {
        let row_value = min + (f64::from(height - row) - 0.5) * scale;
        queue!(out, MoveTo(left, top + row), Print(format!("{row_value:.6}")))?;

        for (i, &value) in series.iter().enumerate() {
            let x = left as usize + GRAPH_SCALE_WIDTH + i;
            if x >= cols as usize - 1 {
                break;
            }
            let scaled = (value - min) / scale;
            if scaled >= f64::from(height - row - 1) && scaled < f64::from(height - row) {
                queue!(out, MoveTo(x as u16, top + row), Print("•"))?;
            }
        }
    }
    Ok(())
}
