// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/profiler.rs
// Version: 1.0.1
// Developer: accel-bench contributors
//
// This file provides the analysis side of a benchmark: accumulated timings
// per kernel variant, the faster-variant verdict with its speedup ratio, and
// the element-wise verification of both variants' outputs.
//
// Tree Location:
// - src/benchmark/profiler.rs (timing comparison and output verification)
// - Depends on: serde

use serde::Serialize;

/// Mismatch examples kept for reporting
pub const MAX_MISMATCH_EXAMPLES: usize = 3;

/// Accumulated timing of one kernel variant over a fixed number of runs
#[derive(Debug, Clone, Serialize)]
pub struct VariantTiming {
    /// Display name of the kernel variant
    pub name: String,

    /// Number of timed full-batch runs
    pub runs: usize,

    /// Sum of all run times in microseconds
    pub total_micros: f64,
}

impl VariantTiming {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: 0,
            total_micros: 0.0,
        }
    }

    /// Add one timed run
    pub fn record(&mut self, micros: f64) {
        self.runs += 1;
        self.total_micros += micros;
    }

    /// Average run time in microseconds, zero when nothing was recorded
    pub fn average_micros(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_micros / self.runs as f64
    }
}

/// Which variant ran faster on average
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// `winner` beat `loser`; `speedup` is loser average / winner average.
    /// An infinite speedup serializes to JSON as `null`.
    Faster {
        winner: String,
        loser: String,
        speedup: f64,
    },

    /// Averages were exactly equal
    Similar,
}

/// Compare two timings by average run time.
///
/// A zero winning average gives an infinite speedup.
pub fn compare_timings(first: &VariantTiming, second: &VariantTiming) -> Verdict {
    let a = first.average_micros();
    let b = second.average_micros();
    if a < b {
        Verdict::Faster {
            winner: first.name.clone(),
            loser: second.name.clone(),
            speedup: b / a,
        }
    } else if b < a {
        Verdict::Faster {
            winner: second.name.clone(),
            loser: first.name.clone(),
            speedup: a / b,
        }
    } else {
        Verdict::Similar
    }
}

/// One index where the two variants disagreed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Zero-based sample index
    pub index: usize,
    pub first: i32,
    pub second: i32,
}

/// Outcome of comparing two result buffers element by element
#[derive(Debug, Clone, Serialize)]
pub struct OutputVerification {
    /// Number of compared results
    pub compared: usize,

    /// Total number of disagreeing indices
    pub mismatches: usize,

    /// First few disagreements, at most `MAX_MISMATCH_EXAMPLES`
    pub examples: Vec<Mismatch>,
}

impl OutputVerification {
    pub fn all_match(&self) -> bool {
        self.mismatches == 0
    }
}

/// Compare two index-aligned result buffers.
///
/// Only the common prefix is compared when the lengths differ.
pub fn verify_outputs(first: &[i32], second: &[i32]) -> OutputVerification {
    let mut mismatches = 0;
    let mut examples = Vec::new();
    for (index, (&a, &b)) in first.iter().zip(second.iter()).enumerate() {
        if a != b {
            mismatches += 1;
            if examples.len() < MAX_MISMATCH_EXAMPLES {
                examples.push(Mismatch {
                    index,
                    first: a,
                    second: b,
                });
            }
        }
    }
    OutputVerification {
        compared: first.len().min(second.len()),
        mismatches,
        examples,
    }
}

// Changelog:
// - v1.0.1 (2026-10-20): Documented JSON form of an infinite speedup.
// - v1.0.0 (2026-10-19): Initial analysis utilities.
//   - VariantTiming accumulation with total and average.
//   - Verdict comparison with speedup ratio or Similar on equal averages.
//   - Output verification with up to three mismatch examples.
