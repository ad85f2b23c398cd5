// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/timer.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file provides the monotonic clock abstraction and the batch timer.
// Batches of a few samples finish in well under a millisecond, so the clock
// must resolve microseconds or the measurement reads as zero.
//
// Tree Location:
// - src/benchmark/timer.rs (monotonic clock and timer)
// - Depends on: std

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Monotonic clock with at least microsecond resolution
pub trait MonotonicClock {
    /// Time elapsed since the clock's own origin
    fn now(&self) -> Duration;
}

/// Clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for InstantClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Measures elapsed microseconds around a unit of work
#[derive(Debug, Clone, Default)]
pub struct Timer<C: MonotonicClock = InstantClock> {
    clock: C,
}

impl<C: MonotonicClock> Timer<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Run `work` once and return the elapsed time in microseconds
    pub fn measure<F, T>(&self, work: F) -> f64
    where
        F: FnOnce() -> T,
    {
        let start = self.clock.now();
        black_box(work());
        let end = self.clock.now();
        end.saturating_sub(start).as_secs_f64() * 1_000_000.0
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial timer.
//   - MonotonicClock trait with an Instant-backed implementation.
//   - Timer::measure returns f64 microseconds and black-boxes the work result.
