// src/sim/history.rs

//! Frame-time history: a bounded ring of recent samples plus an unbounded,
//! periodically grown series for long-run graphing.
//!
//! Both series use 0.0 as the "never recorded" sentinel; the downsampler
//! treats any bucket touching a sentinel as unpopulated.

use anyhow::{bail, Result};

/// Smallest accepted ring capacity. Anything at or below 10 leaves the
/// graphs too narrow to mean anything and is rejected at construction.
const MIN_RING_CAPACITY: usize = 11;

/// The most recent `capacity` frame times, indexed circularly by generation.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRing {
    samples: Vec<f64>,
    capacity: usize,
}

impl FrameRing {
    fn new(capacity: usize) -> Self {
        FrameRing {
            samples: vec![0.0; capacity],
            capacity,
        }
    }

    /// Fixed number of samples the ring holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw sample buffer; `samples()[g % capacity]` holds generation `g`.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn put(&mut self, generation: u64, elapsed: f64) {
        let slot = (generation % self.capacity as u64) as usize;
        self.samples[slot] = elapsed;
    }

    /// The ring in chronological order as of `generation` recorded frames,
    /// oldest first. Slots that were never written come out as 0.0, at the
    /// front, so the newest samples always hug the end.
    pub fn in_order(&self, generation: u64) -> Vec<f64> {
        let capacity = self.capacity as u64;
        (0..capacity)
            .map(|offset| self.samples[((generation + offset) % capacity) as usize])
            .collect()
    }
}

/// The full frame-time series, indexed directly by generation.
///
/// The backing storage always holds exactly `capacity` samples, zero-filled
/// beyond the last recorded generation. When the series fills, capacity
/// grows by the fixed increment it was created with, never geometrically:
/// constant increments keep downsampling buckets a comparable width from
/// one growth to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLog {
    samples: Vec<f64>,
    capacity: usize,
    increment: usize,
}

impl FrameLog {
    fn new(capacity: usize) -> Self {
        FrameLog {
            samples: vec![0.0; capacity],
            capacity,
            increment: capacity,
        }
    }

    /// Current capacity; always a multiple of the growth increment.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All samples up to the current capacity, zero-filled past the last
    /// recorded generation.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn put(&mut self, generation: u64, elapsed: f64) {
        self.samples[generation as usize] = elapsed;
        if generation as usize == self.capacity - 1 {
            self.capacity += self.increment;
            self.samples.resize(self.capacity, 0.0);
        }
    }
}

/// Recorder owning both frame-time series.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    ring: FrameRing,
    log: FrameLog,
}

impl History {
    /// Creates a recorder whose ring holds `capacity` samples and whose log
    /// grows in `capacity`-sized steps. Capacities of 10 or less are
    /// rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < MIN_RING_CAPACITY {
            bail!("history capacity must be greater than 10, got {capacity}");
        }
        Ok(History {
            ring: FrameRing::new(capacity),
            log: FrameLog::new(capacity),
        })
    }

    /// The bounded ring of recent samples.
    pub fn ring(&self) -> &FrameRing {
        &self.ring
    }

    /// The unbounded full series.
    pub fn log(&self) -> &FrameLog {
        &self.log
    }

    /// Records the frame time for `generation` in both series.
    ///
    /// Generations must arrive consecutively from 0; the log grows exactly
    /// when its last slot is written.
    pub fn record(&mut self, generation: u64, elapsed: f64) {
        self.ring.put(generation, elapsed);
        self.log.put(generation, elapsed);
    }

    /// Discards every sample and restores the initial log capacity.
    pub fn reset(&mut self) {
        let capacity = self.ring.capacity;
        self.ring = FrameRing::new(capacity);
        self.log = FrameLog::new(capacity);
    }
}

/// Compresses `series` into `bucket_count` contiguous buckets for graphing.
///
/// Each bucket covers `floor(len / bucket_count)` samples and yields their
/// arithmetic mean; trailing samples that do not fill a bucket are dropped.
/// A bucket containing an exact 0.0 reports 0.0: zero marks a slot that has
/// not been recorded yet, and one unpopulated slot makes the whole bucket
/// unpopulated. A legitimately measured zero duration is indistinguishable
/// from the sentinel; the graphs have always treated it as no-data.
pub fn downsample(series: &[f64], bucket_count: usize) -> Vec<f64> {
    if bucket_count == 0 {
        return Vec::new();
    }
    let bucket_len = series.len() / bucket_count;
    if bucket_len == 0 {
        return vec![0.0; bucket_count];
    }
    (0..bucket_count)
        .map(|i| bucket_mean(&series[i * bucket_len..(i + 1) * bucket_len]))
        .collect()
}

fn bucket_mean(bucket: &[f64]) -> f64 {
    let mut sum = 0.0;
    for &sample in bucket {
        if sample == 0.0 {
            return 0.0;
        }
        sum += sample;
    }
    sum / bucket.len() as f64
}
