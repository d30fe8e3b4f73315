// src/sim/engine.rs

//! The automaton update rule.
//!
//! `step` reads an immutable source grid and writes the next generation into
//! a separate output grid, so every neighbor count comes from the pre-step
//! state regardless of iteration order. The session ping-pongs two grid
//! buffers through here, which keeps the per-frame heap quiet.

use super::grid::Grid;
use crate::cell::{Cell, DEAD_CELL};

/// Advances `src` by one generation into `dst`.
///
/// A live cell with 2 or 3 live Moore neighbors survives and ages by one;
/// any other live cell dies. A dead cell with exactly 3 live neighbors is
/// born at age 1. Grid edges do not wrap; out-of-range neighbors count as
/// dead. A zero-sized grid passes through unchanged.
///
/// `dst` is reshaped to match `src` when necessary; its previous contents
/// are irrelevant because every cell is overwritten.
pub fn step(src: &Grid, dst: &mut Grid) {
    if dst.width() != src.width() || dst.height() != src.height() {
        dst.resize_to(src.width(), src.height());
    }
    for y in 0..src.height() {
        for x in 0..src.width() {
            let cell = src[(x, y)];
            let next = match (cell.alive, live_neighbors(src, x, y)) {
                (true, 2) | (true, 3) => Cell {
                    alive: true,
                    age: cell.age.saturating_add(1),
                },
                (true, _) => DEAD_CELL,
                (false, 3) => Cell { alive: true, age: 1 },
                (false, _) => cell,
            };
            dst.set(x, y, next);
        }
    }
}

/// Counts live cells among the up-to-8 neighbors of `(x, y)`.
fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx >= grid.width() as isize || ny >= grid.height() as isize {
                continue;
            }
            if grid[(nx as usize, ny as usize)].alive {
                count += 1;
            }
        }
    }
    count
}
