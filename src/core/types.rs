// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file defines core data structures for accel-bench, located in the core
// subdirectory. It includes the command-line arguments, the Sample record and
// the Batch pairing samples with their computed accelerations.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde, log

use crate::core::error::HarnessError;
use crate::core::kernel::AccelKernel;
use clap::Parser;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Timed iterations per kernel variant when no override is given
pub const DEFAULT_RUNS: usize = 30;

/// Workload sizes benchmarked when no override is given
pub const DEFAULT_SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

/// Upper bound accepted for `--runs`
pub const MAX_RUNS: usize = 10_000;

/// Upper bound accepted for a single entry of `--sizes`
pub const MAX_WORKLOAD_SIZE: usize = 50_000_000;

/// Command-line arguments for accel-bench
#[derive(Parser, Debug, Clone)]
#[command(
    name = "accel-bench",
    version,
    about = "Vehicle acceleration kernel: reference vs unrolled benchmark",
    long_about = "accel-bench computes vehicle acceleration from (Vi, Vf, T) triples and compares\n\
                  two independently written kernels for correctness and speed.\n\n\
                  PHASES:\n\
                    1. Correctness check against literal samples with known results\n\
                    2. Optional interactive check with samples typed on stdin (y/n prompt)\n\
                    3. Performance benchmark on random workloads, timed per variant\n\n\
                  Examples:\n\
                    Default run: accel-bench\n\
                    Scripted run: accel-bench --skip-interactive --sizes 1000,100000 --runs 50\n\
                    Reproducible: accel-bench --seed 42 --json"
)]
pub struct Args {
    /// Timed full-batch runs per kernel variant
    #[arg(
        long,
        default_value_t = DEFAULT_RUNS,
        value_name = "COUNT",
        help = "Timed runs per kernel variant"
    )]
    pub runs: usize,

    /// Workload sizes for the performance phase, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_SIZES,
        value_name = "LIST",
        help = "Workload sizes (e.g. 10,100,1000,10000)"
    )]
    pub sizes: Vec<usize>,

    /// Seed for the workload generator; a fresh one is drawn when absent
    #[arg(long, value_name = "SEED", help = "RNG seed for reproducible workloads")]
    pub seed: Option<u64>,

    /// Do not ask whether to run the interactive phase
    #[arg(long, default_value = "false", help = "Skip the interactive phase prompt")]
    pub skip_interactive: bool,

    /// Print a JSON summary of the performance phase after the report
    #[arg(long, default_value = "false", help = "Append a JSON performance summary")]
    pub json: bool,

    /// Log verbosity for stderr diagnostics
    #[arg(
        long,
        default_value = "warn",
        value_name = "LEVEL",
        help = "Log level [off, error, warn, info, debug, trace]"
    )]
    pub log_level: String,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.runs == 0 {
            return Err("Run count must be greater than 0".to_string());
        }
        if self.runs > MAX_RUNS {
            return Err(format!("Run count cannot exceed {}", MAX_RUNS));
        }
        if self.sizes.is_empty() {
            return Err("At least one workload size is required".to_string());
        }
        if let Some(bad) = self.sizes.iter().find(|&&s| s == 0 || s > MAX_WORKLOAD_SIZE) {
            return Err(format!(
                "Workload size {} is out of range (1-{})",
                bad, MAX_WORKLOAD_SIZE
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    /// Parse the configured log level
    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| format!("Unknown log level '{}'", self.log_level))
    }
}

/// One (initial speed, final speed, duration) input record.
///
/// Speeds are in km/h, duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub initial_speed: f64,
    pub final_speed: f64,
    pub duration: f64,
}

impl Sample {
    pub fn new(initial_speed: f64, final_speed: f64, duration: f64) -> Self {
        Self {
            initial_speed,
            final_speed,
            duration,
        }
    }
}

/// Samples and their computed accelerations, index-aligned
#[derive(Debug, Clone)]
pub struct Batch {
    samples: Vec<Sample>,
    results: Vec<i32>,
}

impl Batch {
    /// Take ownership of `samples` and allocate a zeroed result slot for each
    pub fn new(samples: Vec<Sample>) -> Result<Self, HarnessError> {
        let results = zeroed_results(samples.len())?;
        Ok(Self { samples, results })
    }

    /// Copy this batch's samples into a fresh batch with its own result slots
    pub fn try_clone_samples(&self) -> Result<Self, HarnessError> {
        let mut samples = Vec::new();
        samples
            .try_reserve_exact(self.samples.len())
            .map_err(|_| HarnessError::allocation(self.samples.len()))?;
        samples.extend_from_slice(&self.samples);
        Self::new(samples)
    }

    /// Run `kernel` over every sample, overwriting the results
    pub fn evaluate(&mut self, kernel: &dyn AccelKernel) {
        kernel.compute_batch(&self.samples, &mut self.results);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn results(&self) -> &[i32] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

fn zeroed_results(count: usize) -> Result<Vec<i32>, HarnessError> {
    let mut results = Vec::new();
    results
        .try_reserve_exact(count)
        .map_err(|_| HarnessError::allocation(count))?;
    results.resize(count, 0);
    Ok(results)
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial data model.
//   - Args with runs/sizes/seed/skip-interactive/json/log-level and validate().
//   - Sample record and Batch with fallible allocation of result slots.
