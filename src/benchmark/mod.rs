// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file declares the benchmark module: workload generation, timing,
// result analysis and the runner tying them together for one workload size.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: jobs, timer, profiler, runner

pub mod jobs;
pub mod profiler;
pub mod runner;
pub mod timer;

// Re-export key benchmark types and functions
pub use jobs::{CorrectnessCase, SpeedRanges, WorkloadGenerator, correctness_cases};
pub use profiler::{Mismatch, OutputVerification, VariantTiming, Verdict};
pub use runner::{BenchmarkConfig, BenchmarkRunner, BenchmarkSummary, PerformanceReport};
pub use timer::{InstantClock, MonotonicClock, Timer};

// Changelog:
// - v1.0.0 (2026-10-19): Initial benchmark module.
//   - Declares jobs, timer, profiler and runner with re-exports.
