// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file serves as the main library entry point for accel-bench, located
// at the root of the source tree. It exports all public modules and types
// that the binary and the integration tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, benchmark, harness, utils

pub mod benchmark;
pub mod core;
pub mod harness;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::benchmark::runner::{BenchmarkConfig, BenchmarkRunner};
pub use crate::core::{AccelKernel, HarnessError, ReferenceKernel, Sample, UnrolledKernel};
pub use crate::harness::{Harness, KernelPair};

// Changelog:
// - v1.0.0 (2026-10-19): Initial library root.
//   - Organizes the project into core, benchmark, harness and utils modules.
//   - Re-exports the kernels, the runner and the harness.
