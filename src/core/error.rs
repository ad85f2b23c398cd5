// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file defines the error type shared by the harness phases. Every error
// is contained to the phase that raised it; none of them ends the process.
//
// Tree Location:
// - src/core/error.rs (harness error taxonomy)
// - Depends on: thiserror

use std::io;
use thiserror::Error;

/// Errors raised while preparing or running a harness phase
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Memory allocation failed for {count} records")]
    Allocation { count: usize },

    #[error("Invalid record count: {0:?}")]
    InvalidCount(String),

    #[error("Input stream closed before all records were read")]
    InputClosed,

    #[error("Workload size must be at least 1")]
    EmptyWorkload,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HarnessError {
    /// Build an allocation error for a request of `count` records
    pub fn allocation(count: usize) -> Self {
        Self::Allocation { count }
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial error taxonomy.
//   - Allocation, malformed count, closed stream, empty workload and I/O
//     failures, each aborting only the phase that raised it.
