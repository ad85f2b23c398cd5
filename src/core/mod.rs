// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file is the module declaration for the core functionality of
// accel-bench, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod error;
pub mod kernel;
pub mod types;
pub mod unrolled;

// Re-export the most commonly used items
pub use error::HarnessError;
pub use kernel::{AccelKernel, KMH_TO_MS, ReferenceKernel, reference_accel};
pub use types::{Args, Batch, Sample};
pub use unrolled::UnrolledKernel;

// Changelog:
// - v1.0.0 (2026-10-19): Initial core module.
//   - Declares kernel, unrolled, types and error submodules.
