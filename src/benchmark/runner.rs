// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 1.0.1
// Developer: accel-bench contributors
//
// This file implements the benchmark execution engine. For one workload size
// it generates a random batch, times a fixed number of full-batch runs of
// each kernel variant, and verifies that both variants produced the same
// results.

use crate::benchmark::jobs::WorkloadGenerator;
use crate::benchmark::profiler::{
    OutputVerification, VariantTiming, Verdict, compare_timings, verify_outputs,
};
use crate::benchmark::timer::{InstantClock, MonotonicClock, Timer};
use crate::core::error::HarnessError;
use crate::core::kernel::AccelKernel;
use crate::core::types::{Batch, DEFAULT_RUNS, DEFAULT_SIZES, Sample};
use crate::utils::format::FormatUtils;
use log::{debug, info};
use rand::Rng;
use serde::Serialize;
use std::hint::black_box;

const LOG_TARGET: &str = "accel_bench::runner";

/// Samples and results echoed in reports
pub const DISPLAY_SAMPLES: usize = 3;

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Timed full-batch runs per variant
    pub runs: usize,

    /// Workload sizes, benchmarked in order
    pub sizes: Vec<usize>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

/// Everything measured for one workload size
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    /// Number of samples in the batch
    pub size: usize,

    /// Leading samples of the batch, for display
    pub sample_inputs: Vec<Sample>,

    pub first: VariantTiming,
    pub second: VariantTiming,
    pub verdict: Verdict,
    pub verification: OutputVerification,

    /// Leading (first, second) result pairs, for display
    pub sample_outputs: Vec<(i32, i32)>,
}

/// Machine-readable roll-up of a whole performance phase.
///
/// JSON has no infinity, so an infinite speedup serializes as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSummary {
    pub seed: u64,
    pub runs: usize,
    pub reports: Vec<PerformanceReport>,
}

/// Main benchmark runner
pub struct BenchmarkRunner<C: MonotonicClock = InstantClock> {
    config: BenchmarkConfig,
    timer: Timer<C>,
}

impl BenchmarkRunner<InstantClock> {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self::with_clock(config, InstantClock::new())
    }
}

impl<C: MonotonicClock> BenchmarkRunner<C> {
    pub fn with_clock(config: BenchmarkConfig, clock: C) -> Self {
        Self {
            config,
            timer: Timer::new(clock),
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Time `runs` full-batch evaluations of `kernel` over `batch`
    pub fn time_variant(&self, batch: &mut Batch, kernel: &dyn AccelKernel) -> VariantTiming {
        let mut timing = VariantTiming::new(kernel.name());
        for run in 0..self.config.runs {
            let micros = self
                .timer
                .measure(|| black_box(&mut *batch).evaluate(black_box(kernel)));
            timing.record(micros);
            debug!(target: LOG_TARGET,
                "{} run {}/{}: {:.3} us",
                kernel.name(), run + 1, self.config.runs, micros
            );
        }
        info!(target: LOG_TARGET,
            "⏱️ {}: total {} over {} runs, average {}",
            timing.name,
            FormatUtils::format_micros(timing.total_micros),
            timing.runs,
            FormatUtils::format_micros(timing.average_micros())
        );
        timing
    }

    /// Benchmark both variants on a fresh random batch of `size` samples
    pub fn run_size<R: Rng>(
        &self,
        size: usize,
        generator: &mut WorkloadGenerator<R>,
        first: &dyn AccelKernel,
        second: &dyn AccelKernel,
    ) -> Result<PerformanceReport, HarnessError> {
        if size == 0 {
            return Err(HarnessError::EmptyWorkload);
        }
        info!(target: LOG_TARGET,
            "🧪 Benchmarking {} samples ({} vs {}, {} runs each)",
            FormatUtils::format_number(size as u64),
            first.name(),
            second.name(),
            self.config.runs
        );

        let mut first_batch = Batch::new(generator.generate(size)?)?;
        let mut second_batch = first_batch.try_clone_samples()?;

        let first_timing = self.time_variant(&mut first_batch, first);
        let second_timing = self.time_variant(&mut second_batch, second);

        let verdict = compare_timings(&first_timing, &second_timing);
        let verification = verify_outputs(first_batch.results(), second_batch.results());
        if !verification.all_match() {
            info!(target: LOG_TARGET,
                "❌ {} of {} results differ between {} and {}",
                verification.mismatches, verification.compared, first.name(), second.name()
            );
        }

        let shown = size.min(DISPLAY_SAMPLES);
        let sample_outputs = first_batch.results()[..shown]
            .iter()
            .copied()
            .zip(second_batch.results()[..shown].iter().copied())
            .collect();

        Ok(PerformanceReport {
            size,
            sample_inputs: first_batch.samples()[..shown].to_vec(),
            first: first_timing,
            second: second_timing,
            verdict,
            verification,
            sample_outputs,
        })
    }
}

// Changelog:
// - v1.0.1 (2026-10-20): Timed batch and kernel pass through black_box.
// - v1.0.0 (2026-10-19): Initial benchmark runner.
//   - Per-size batch generation, fixed-count timing per variant, verdict and
//     verification folded into a serializable PerformanceReport.
