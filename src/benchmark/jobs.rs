// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/jobs.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file provides the benchmark workloads: random sample batches drawn
// from bounded uniform ranges, and the literal correctness cases with known
// expected accelerations.

use crate::core::error::HarnessError;
use crate::core::types::Sample;
use log::debug;
use rand::Rng;
use std::ops::Range;

const LOG_TARGET: &str = "accel_bench::jobs";

/// Literal sample with its expected acceleration
#[derive(Debug, Clone, Copy)]
pub struct CorrectnessCase {
    pub sample: Sample,
    pub expected: i32,
}

/// The fixed correctness cases checked before any benchmark
pub fn correctness_cases() -> Vec<CorrectnessCase> {
    vec![
        CorrectnessCase {
            sample: Sample::new(0.0, 62.5, 10.1),
            expected: 2,
        },
        CorrectnessCase {
            sample: Sample::new(60.0, 122.3, 5.5),
            expected: 3,
        },
        CorrectnessCase {
            sample: Sample::new(30.0, 160.7, 7.8),
            expected: 5,
        },
    ]
}

/// Half-open ranges each generated sample field is drawn from
#[derive(Debug, Clone)]
pub struct SpeedRanges {
    /// Initial speed range in km/h
    pub initial_speed: Range<f64>,

    /// Final speed range in km/h
    pub final_speed: Range<f64>,

    /// Duration range in seconds
    pub duration: Range<f64>,
}

impl Default for SpeedRanges {
    fn default() -> Self {
        Self {
            initial_speed: 0.0..100.0,
            final_speed: 50.0..200.0,
            duration: 3.0..15.0,
        }
    }
}

impl SpeedRanges {
    /// Check whether every field of `sample` lies in its range
    pub fn contains(&self, sample: &Sample) -> bool {
        self.initial_speed.contains(&sample.initial_speed)
            && self.final_speed.contains(&sample.final_speed)
            && self.duration.contains(&sample.duration)
    }
}

/// Produces random samples from an owned random source
pub struct WorkloadGenerator<R: Rng> {
    rng: R,
    ranges: SpeedRanges,
}

impl<R: Rng> WorkloadGenerator<R> {
    /// Create a generator over the default speed and duration ranges
    pub fn new(rng: R) -> Self {
        Self::with_ranges(rng, SpeedRanges::default())
    }

    pub fn with_ranges(rng: R, ranges: SpeedRanges) -> Self {
        Self { rng, ranges }
    }

    pub fn ranges(&self) -> &SpeedRanges {
        &self.ranges
    }

    /// Draw a single sample, each field independent and uniform
    pub fn sample(&mut self) -> Sample {
        Sample {
            initial_speed: self.rng.gen_range(self.ranges.initial_speed.clone()),
            final_speed: self.rng.gen_range(self.ranges.final_speed.clone()),
            duration: self.rng.gen_range(self.ranges.duration.clone()),
        }
    }

    /// Generate `count` samples, failing cleanly if the buffer cannot be allocated
    pub fn generate(&mut self, count: usize) -> Result<Vec<Sample>, HarnessError> {
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(count)
            .map_err(|_| HarnessError::allocation(count))?;
        for _ in 0..count {
            samples.push(self.sample());
        }
        debug!(target: LOG_TARGET, "Generated {} random samples", count);
        Ok(samples)
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial workload definitions.
//   - Added the three literal correctness cases.
//   - Added WorkloadGenerator with default ranges [0,100), [50,200), [3,15).
