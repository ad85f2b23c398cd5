// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/harness/correctness.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file implements the correctness phase: both kernel variants run over
// the literal cases and every result is checked against its expected value.
//
// Tree Location:
// - src/harness/correctness.rs (correctness phase)
// - Depends on: benchmark/jobs, core, utils/format

use crate::benchmark::jobs::{CorrectnessCase, correctness_cases};
use crate::core::error::HarnessError;
use crate::core::types::{Batch, Sample};
use crate::harness::KernelPair;
use crate::utils::format::FormatUtils;
use log::{info, warn};
use std::io::Write;

const LOG_TARGET: &str = "accel_bench::correctness";

/// One checked case
#[derive(Debug, Clone, Copy)]
pub struct CorrectnessRow {
    pub sample: Sample,
    pub first: i32,
    pub second: i32,
    pub expected: i32,
}

impl CorrectnessRow {
    pub fn passed(&self) -> bool {
        self.first == self.expected && self.second == self.expected
    }
}

/// Per-case results of the correctness phase
#[derive(Debug, Clone)]
pub struct CorrectnessReport {
    pub rows: Vec<CorrectnessRow>,
}

impl CorrectnessReport {
    pub fn passed(&self) -> bool {
        self.rows.iter().all(CorrectnessRow::passed)
    }
}

/// Evaluate both variants over `cases`
pub fn check_cases(
    kernels: &KernelPair,
    cases: &[CorrectnessCase],
) -> Result<CorrectnessReport, HarnessError> {
    let samples: Vec<Sample> = cases.iter().map(|c| c.sample).collect();
    let mut first = Batch::new(samples)?;
    let mut second = first.try_clone_samples()?;
    first.evaluate(kernels.first.as_ref());
    second.evaluate(kernels.second.as_ref());

    let rows = cases
        .iter()
        .zip(first.results().iter().zip(second.results()))
        .map(|(case, (&a, &b))| CorrectnessRow {
            sample: case.sample,
            first: a,
            second: b,
            expected: case.expected,
        })
        .collect();
    Ok(CorrectnessReport { rows })
}

/// Run the correctness phase over the built-in cases and print the report
pub fn run_correctness<W: Write>(
    kernels: &KernelPair,
    out: &mut W,
) -> Result<CorrectnessReport, HarnessError> {
    writeln!(out)?;
    writeln!(out, "{}", FormatUtils::banner("CORRECTNESS CHECK (Predefined Values)"))?;

    let report = check_cases(kernels, &correctness_cases())?;
    write_correctness_report(out, kernels, &report)?;

    if report.passed() {
        info!(target: LOG_TARGET, "✅ All {} correctness cases passed", report.rows.len());
    } else {
        warn!(target: LOG_TARGET, "❌ Correctness check failed");
    }
    Ok(report)
}

/// Print each case with both variants' outputs and the overall verdict
pub fn write_correctness_report<W: Write>(
    out: &mut W,
    kernels: &KernelPair,
    report: &CorrectnessReport,
) -> Result<(), HarnessError> {
    let (a, b) = (kernels.first.name(), kernels.second.name());
    writeln!(out, "\nInput Data (Vi, Vf, T):")?;
    writeln!(out, "------------------------------------------------")?;
    for (i, row) in report.rows.iter().enumerate() {
        writeln!(
            out,
            "Car {}: Vi={:.1} km/h, Vf={:.1} km/h, T={:.1} s",
            i + 1,
            row.sample.initial_speed,
            row.sample.final_speed,
            row.sample.duration
        )?;
        writeln!(
            out,
            "  {}: {} m/s^2 | {}: {} m/s^2 | Expected: {} m/s^2 {}",
            a,
            row.first,
            b,
            row.second,
            row.expected,
            if row.passed() { "[PASS]" } else { "[FAIL]" }
        )?;
    }
    writeln!(out, "------------------------------------------------")?;
    if report.passed() {
        writeln!(out, "{} CORRECTNESS CHECK PASSED!", FormatUtils::mark(true))?;
    } else {
        writeln!(out, "{} CORRECTNESS CHECK FAILED!", FormatUtils::mark(false))?;
    }
    Ok(())
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial correctness phase.
//   - Both variants over the literal cases, per-case PASS/FAIL and overall verdict.
