// src/sim/grid.rs

//! The simulation grid: an owned 2-D array of cells.
//!
//! The grid upholds one structural invariant: `rows` holds exactly `height`
//! rows of exactly `width` cells, never jagged, not even transiently.
//! Resizing therefore builds a complete replacement grid and swaps it in
//! whole; a partial failure can never leave mismatched row lengths behind.
//! Zero-sized grids are legal and behave as empty.

use std::ops::Index;

use rand::Rng;

use crate::cell::{Cell, DEAD_CELL};

/// A single row of cells, left to right.
pub type Row = Vec<Cell>;

/// A rectangular field of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates an all-dead grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            rows: (0..height).map(|_| vec![DEAD_CELL; width]).collect(),
            width,
            height,
        }
    }

    /// Creates a grid with every cell independently randomized.
    pub fn random(width: usize, height: usize) -> Self {
        let mut grid = Self::new(width, height);
        grid.randomize();
        grid
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Cell at `(x, y)`, or `None` when out of range.
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// The rows, top to bottom.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.alive)
            .count()
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    /// Reseeds every cell: alive with probability 1/2, age 0.
    pub fn randomize(&mut self) {
        let mut rng = rand::thread_rng();
        for row in &mut self.rows {
            for cell in row.iter_mut() {
                *cell = seed_cell(&mut rng);
            }
        }
    }

    /// Resizes the grid to `new_width` x `new_height`.
    ///
    /// Cells inside the overlapping region keep their exact state. Cells in
    /// newly exposed rows or columns are freshly seeded. Shrinking drops the
    /// rows and columns beyond the new size without touching the survivors.
    /// Matching dimensions are a no-op.
    pub fn resize_to(&mut self, new_width: usize, new_height: usize) {
        if new_width == self.width && new_height == self.height {
            return;
        }
        let mut rng = rand::thread_rng();
        let rows: Vec<Row> = (0..new_height)
            .map(|y| {
                (0..new_width)
                    .map(|x| match self.get(x, y) {
                        Some(&kept) => kept,
                        None => seed_cell(&mut rng),
                    })
                    .collect()
            })
            .collect();
        self.rows = rows;
        self.width = new_width;
        self.height = new_height;
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    /// Indexes by `(x, y)`. Panics when out of range, like slice indexing.
    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        &self.rows[y][x]
    }
}

fn seed_cell<R: Rng + ?Sized>(rng: &mut R) -> Cell {
    Cell {
        alive: rng.gen_bool(0.5),
        age: 0,
    }
}
