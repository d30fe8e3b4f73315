// src/sim/tests.rs

use super::engine;
use super::grid::Grid;
use super::history::{downsample, History};
use super::Session;
use crate::cell::Cell;

fn live(age: u32) -> Cell {
    Cell { alive: true, age }
}

/// Grid with only the given `(x, y)` cells alive, all at age 0.
fn grid_with_live(width: usize, height: usize, live_at: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(width, height);
    for &(x, y) in live_at {
        grid.set(x, y, live(0));
    }
    grid
}

/// Steps `src` into a fresh buffer and returns it.
fn stepped(src: &Grid) -> Grid {
    let mut dst = Grid::new(0, 0);
    engine::step(src, &mut dst);
    dst
}

// --- Grid ---

#[test]
fn new_grid_is_dead_and_rectangular() {
    let grid = Grid::new(7, 3);
    assert_eq!(grid.width(), 7);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.rows().len(), 3);
    assert!(grid.rows().iter().all(|row| row.len() == 7));
    assert_eq!(grid.population(), 0);
}

#[test]
fn random_cells_start_at_age_zero() {
    let grid = Grid::random(16, 16);
    assert!(grid.rows().iter().flatten().all(|cell| cell.age == 0));
}

#[test]
fn resize_to_same_size_is_identity() {
    let mut grid = Grid::random(8, 6);
    let before = grid.clone();
    grid.resize_to(8, 6);
    assert_eq!(grid, before);
}

#[test]
fn resize_wider_preserves_existing_columns() {
    let mut grid = Grid::random(5, 4);
    let before = grid.clone();
    grid.resize_to(8, 4);
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(grid[(x, y)], before[(x, y)], "cell ({x}, {y}) changed");
        }
        for x in 5..8 {
            assert_eq!(grid[(x, y)].age, 0, "new cell ({x}, {y}) is not fresh");
        }
    }
}

#[test]
fn resize_taller_preserves_existing_rows() {
    let mut grid = Grid::random(5, 4);
    let before = grid.clone();
    grid.resize_to(5, 7);
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(grid[(x, y)], before[(x, y)]);
        }
    }
    for y in 4..7 {
        assert!(grid.rows()[y].iter().all(|cell| cell.age == 0));
    }
}

#[test]
fn resize_smaller_keeps_the_surviving_region() {
    let mut grid = Grid::random(6, 5);
    let before = grid.clone();
    grid.resize_to(4, 3);
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.rows().len(), 3);
    assert!(grid.rows().iter().all(|row| row.len() == 4));
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(grid[(x, y)], before[(x, y)]);
        }
    }
}

#[test]
fn shrink_then_grow_stays_rectangular() {
    let mut grid = Grid::random(9, 7);
    grid.resize_to(2, 2);
    let small = grid.clone();
    grid.resize_to(7, 6);
    assert_eq!(grid.rows().len(), 6);
    assert!(grid.rows().iter().all(|row| row.len() == 7));
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(grid[(x, y)], small[(x, y)]);
        }
    }
}

#[test]
fn resize_through_zero_is_tolerated() {
    let mut grid = Grid::random(4, 3);
    grid.resize_to(0, 0);
    assert!(grid.is_empty());
    assert!(grid.rows().is_empty());
    grid.resize_to(3, 2);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert!(grid.rows().iter().flatten().all(|cell| cell.age == 0));
}

#[test]
fn population_counts_live_cells() {
    let grid = grid_with_live(5, 5, &[(0, 0), (2, 3), (4, 4)]);
    assert_eq!(grid.population(), 3);
}

// --- Engine ---

#[test]
fn all_dead_grid_stays_all_dead() {
    for (width, height) in [(0, 0), (1, 1), (5, 4), (12, 9)] {
        let next = stepped(&Grid::new(width, height));
        assert_eq!(next.width(), width);
        assert_eq!(next.height(), height);
        assert_eq!(next.population(), 0);
    }
}

#[test]
fn lone_cell_dies_and_its_age_resets() {
    let mut grid = grid_with_live(5, 5, &[]);
    grid.set(2, 2, live(3));
    let next = stepped(&grid);
    assert!(!next[(2, 2)].alive);
    assert_eq!(next[(2, 2)].age, 0);
    assert_eq!(next.population(), 0);
}

#[test]
fn l_triomino_grows_into_a_block() {
    let grid = grid_with_live(5, 5, &[(1, 1), (1, 2), (2, 1)]);
    let next = stepped(&grid);
    for (x, y) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        assert!(next[(x, y)].alive, "block cell ({x}, {y}) is dead");
    }
    assert_eq!(next.population(), 4);
    // The newborn corner counts this generation as its first survived.
    assert_eq!(next[(2, 2)].age, 1);
}

#[test]
fn live_cell_with_two_or_three_neighbors_survives() {
    // A row of three: the center has exactly two live neighbors.
    for size in 3..=8 {
        let center = size / 2;
        let grid = grid_with_live(
            size,
            size,
            &[(center - 1, center), (center, center), (center + 1, center)],
        );
        let next = stepped(&grid);
        assert!(next[(center, center)].alive, "center died on a {size}x{size} grid");
    }
}

#[test]
fn survivors_age_one_generation_at_a_time() {
    // A 2x2 block is stable; every cell has exactly three neighbors.
    let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
    let mut grid = grid_with_live(4, 4, &block);
    for expected_age in 1..=3 {
        grid = stepped(&grid);
        for &(x, y) in &block {
            assert!(grid[(x, y)].alive);
            assert_eq!(grid[(x, y)].age, expected_age);
        }
    }
}

#[test]
fn step_result_is_independent_of_the_output_buffer() {
    let src = grid_with_live(6, 6, &[(1, 1), (1, 2), (2, 1), (4, 4)]);
    let mut fresh = Grid::new(0, 0);
    let mut reused = Grid::random(9, 2);
    engine::step(&src, &mut fresh);
    engine::step(&src, &mut reused);
    assert_eq!(fresh, reused);
}

#[test]
fn step_does_not_mutate_the_source() {
    let src = grid_with_live(5, 5, &[(2, 2)]);
    let before = src.clone();
    let _ = stepped(&src);
    assert_eq!(src, before);
}

// --- History ---

#[test]
fn capacities_of_ten_or_less_are_rejected() {
    assert!(History::new(0).is_err());
    assert!(History::new(10).is_err());
    assert!(History::new(11).is_ok());
}

#[test]
fn ring_wraps_circularly_by_generation() {
    let mut history = History::new(20).unwrap();
    for generation in 0..25u64 {
        history.record(generation, (generation + 1) as f64);
    }
    let samples = history.ring().samples();
    // Generations 20..24 overwrote slots 0..4; 5..19 still hold 6..20.
    for slot in 0..5 {
        assert_eq!(samples[slot], (21 + slot) as f64);
    }
    for slot in 5..20 {
        assert_eq!(samples[slot], (slot + 1) as f64);
    }
}

#[test]
fn ring_in_order_is_chronological() {
    let mut history = History::new(20).unwrap();
    for generation in 0..25u64 {
        history.record(generation, (generation + 1) as f64);
    }
    let ordered = history.ring().in_order(25);
    let expected: Vec<f64> = (6..=25).map(f64::from).collect();
    assert_eq!(ordered, expected);
}

#[test]
fn ring_in_order_pads_unwritten_slots_in_front() {
    let mut history = History::new(12).unwrap();
    for generation in 0..5u64 {
        history.record(generation, (generation + 1) as f64);
    }
    let ordered = history.ring().in_order(5);
    assert_eq!(&ordered[..7], &[0.0; 7]);
    assert_eq!(&ordered[7..], &[1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn log_grows_by_its_fixed_increment_when_full() {
    let mut history = History::new(20).unwrap();
    for generation in 0..19u64 {
        history.record(generation, 1.0);
        assert_eq!(history.log().capacity(), 20);
    }
    history.record(19, 19.5);
    assert_eq!(history.log().capacity(), 40);
    assert_eq!(history.log().samples().len(), 40);
    assert_eq!(history.log().samples()[19], 19.5);
    assert!(history.log().samples()[20..].iter().all(|&v| v == 0.0));

    // Fixed increment, not doubling: the next growth also adds 20.
    for generation in 20..40u64 {
        history.record(generation, 1.0);
    }
    assert_eq!(history.log().capacity(), 60);
}

#[test]
fn log_growth_preserves_recorded_samples() {
    let mut history = History::new(20).unwrap();
    for generation in 0..20u64 {
        history.record(generation, (generation + 1) as f64);
    }
    for generation in 0..20 {
        assert_eq!(history.log().samples()[generation], (generation + 1) as f64);
    }
}

#[test]
fn log_length_always_equals_capacity() {
    let mut history = History::new(11).unwrap();
    for generation in 0..30u64 {
        history.record(generation, 0.5);
        assert_eq!(history.log().samples().len(), history.log().capacity());
    }
}

#[test]
fn reset_restores_the_initial_capacity() {
    let mut history = History::new(12).unwrap();
    for generation in 0..25u64 {
        history.record(generation, 2.0);
    }
    assert!(history.log().capacity() > 12);
    history.reset();
    assert_eq!(history.ring().capacity(), 12);
    assert_eq!(history.log().capacity(), 12);
    assert!(history.ring().samples().iter().all(|&v| v == 0.0));
    assert!(history.log().samples().iter().all(|&v| v == 0.0));
}

// --- Downsampling ---

#[test]
fn downsample_of_a_constant_series_is_constant() {
    let series = vec![0.25; 40];
    assert_eq!(downsample(&series, 4), vec![0.25; 4]);
}

#[test]
fn downsample_averages_each_bucket() {
    let series = vec![1.0, 3.0, 5.0, 7.0];
    assert_eq!(downsample(&series, 2), vec![2.0, 6.0]);
}

#[test]
fn a_single_zero_poisons_its_whole_bucket() {
    let series = vec![4.0, 0.0, 2.0, 2.0];
    assert_eq!(downsample(&series, 2), vec![0.0, 2.0]);
}

#[test]
fn downsample_drops_the_trailing_remainder() {
    // 10 samples into 3 buckets: bucket length 3, the last sample dropped.
    let series = vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 99.0];
    assert_eq!(downsample(&series, 3), vec![1.0, 2.0, 3.0]);
}

#[test]
fn downsample_degenerate_bucket_counts() {
    assert!(downsample(&[1.0, 2.0], 0).is_empty());
    // More buckets than samples: nothing to average, all sentinel.
    assert_eq!(downsample(&[1.0, 2.0], 4), vec![0.0; 4]);
}

// --- Session ---

#[test]
fn session_rejects_a_small_history_capacity() {
    assert!(Session::new(10, 10, 10).is_err());
    assert!(Session::new(10, 10, 11).is_ok());
}

#[test]
fn reconcile_with_matching_size_is_a_noop() {
    let mut session = Session::new(8, 6, 20).unwrap();
    let before = session.grid().clone();
    session.reconcile(8, 6);
    assert_eq!(*session.grid(), before);
}

#[test]
fn reconcile_preserves_the_overlap_on_growth() {
    let mut session = Session::new(6, 4, 20).unwrap();
    let before = session.grid().clone();
    session.reconcile(9, 5);
    assert_eq!(session.grid().width(), 9);
    assert_eq!(session.grid().height(), 5);
    for y in 0..4 {
        for x in 0..6 {
            assert_eq!(session.grid()[(x, y)], before[(x, y)]);
        }
    }
    // The scratch buffer followed along; stepping right after a resize works.
    session.advance();
    assert_eq!(session.grid().width(), 9);
    assert_eq!(session.grid().height(), 5);
}

#[test]
fn advance_while_paused_changes_nothing() {
    let mut session = Session::new(8, 8, 20).unwrap();
    session.toggle_pause();
    let before = session.grid().clone();
    session.advance();
    assert_eq!(*session.grid(), before);
}

#[test]
fn record_frame_while_paused_only_tracks_the_last_time() {
    let mut session = Session::new(4, 4, 20).unwrap();
    session.toggle_pause();
    session.record_frame(0.5);
    assert_eq!(session.last_frame_time(), 0.5);
    assert_eq!(session.generation(), 0);
    assert_eq!(session.avg_frame_time(), 0.0);
    assert!(session.history().ring().samples().iter().all(|&v| v == 0.0));
}

#[test]
fn record_frame_advances_the_running_average() {
    let mut session = Session::new(4, 4, 20).unwrap();
    session.record_frame(1.0);
    session.record_frame(2.0);
    session.record_frame(3.0);
    assert_eq!(session.generation(), 3);
    assert_eq!(session.last_frame_time(), 3.0);
    assert!((session.avg_frame_time() - 2.0).abs() < 1e-12);
    assert_eq!(session.history().ring().samples()[0], 1.0);
    assert_eq!(session.history().log().samples()[2], 3.0);
}

#[test]
fn reset_zeroes_telemetry_and_rebuilds_history() {
    let mut session = Session::new(6, 6, 12).unwrap();
    for i in 0..20 {
        session.advance();
        session.record_frame(0.001 * (i + 1) as f64);
    }
    assert!(session.history().log().capacity() > 12);
    session.reset();
    assert_eq!(session.generation(), 0);
    assert_eq!(session.last_frame_time(), 0.0);
    assert_eq!(session.avg_frame_time(), 0.0);
    assert_eq!(session.history().ring().capacity(), 12);
    assert_eq!(session.history().log().capacity(), 12);
    assert_eq!(session.grid().width(), 6);
    assert_eq!(session.grid().height(), 6);
    assert!(session.grid().rows().iter().flatten().all(|cell| cell.age == 0));
}

#[test]
fn reset_keeps_the_pause_flag() {
    let mut session = Session::new(4, 4, 20).unwrap();
    session.toggle_pause();
    session.reset();
    assert!(session.paused());
}

#[test]
fn zero_sized_session_is_inert() {
    let mut session = Session::new(0, 0, 20).unwrap();
    session.advance();
    session.record_frame(0.01);
    assert!(session.grid().is_empty());
    assert_eq!(session.generation(), 1);
}
