// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/harness/mod.rs
// Version: 1.0.1
// Developer: accel-bench contributors
//
// This file declares the harness module and the Harness orchestrator. The
// harness runs three phases in order (correctness, optional interactive,
// performance). A failing phase prints a message and the next phase still
// runs; nothing here terminates the process. Output that cannot be written
// is logged once and otherwise ignored.
//
// Tree Location:
// - src/harness/mod.rs (harness entry point)
// - Submodules: correctness, interactive, performance

pub mod correctness;
pub mod interactive;
pub mod performance;

use crate::benchmark::jobs::WorkloadGenerator;
use crate::benchmark::runner::{BenchmarkRunner, PerformanceReport};
use crate::benchmark::timer::{InstantClock, MonotonicClock};
use crate::core::error::HarnessError;
use crate::core::kernel::{AccelKernel, ReferenceKernel};
use crate::core::unrolled::UnrolledKernel;
use crate::utils::format::FormatUtils;
use log::{info, warn};
use rand::Rng;
use std::fmt;
use std::io::{self, BufRead, Write};

pub use correctness::{CorrectnessReport, CorrectnessRow, run_correctness};
pub use interactive::{InteractiveReport, ask_yes_no, parse_sample_line, run_interactive};

const LOG_TARGET: &str = "accel_bench::harness";

/// The two kernel variants under comparison
pub struct KernelPair {
    pub first: Box<dyn AccelKernel>,
    pub second: Box<dyn AccelKernel>,
}

impl KernelPair {
    pub fn new(first: Box<dyn AccelKernel>, second: Box<dyn AccelKernel>) -> Self {
        Self { first, second }
    }
}

impl Default for KernelPair {
    fn default() -> Self {
        Self::new(Box::new(ReferenceKernel), Box::new(UnrolledKernel))
    }
}

/// Sequential stages of a harness run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Correctness,
    Interactive,
    Performance,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Correctness => write!(f, "correctness"),
            Phase::Interactive => write!(f, "interactive"),
            Phase::Performance => write!(f, "performance"),
        }
    }
}

/// A phase (or one workload size of the performance phase) that was aborted
#[derive(Debug, Clone)]
pub struct PhaseFailure {
    pub phase: Phase,
    pub message: String,
}

/// What a full harness run produced
#[derive(Debug, Default)]
pub struct HarnessOutcome {
    pub correctness: Option<CorrectnessReport>,
    pub interactive: Option<InteractiveReport>,
    pub reports: Vec<PerformanceReport>,
    pub failures: Vec<PhaseFailure>,
    /// First error hit while writing the report, if any
    pub output_error: Option<String>,
}

impl HarnessOutcome {
    /// Keep the first write failure; later ones are dropped
    fn note_output(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.output_error.is_none() {
                warn!(target: LOG_TARGET, "⚠️ Report output failed: {}", e);
                self.output_error = Some(e.to_string());
            }
        }
    }
}

/// Orchestrates the correctness, interactive and performance phases
pub struct Harness<C: MonotonicClock = InstantClock> {
    kernels: KernelPair,
    runner: BenchmarkRunner<C>,
    ask_interactive: bool,
}

impl<C: MonotonicClock> Harness<C> {
    pub fn new(kernels: KernelPair, runner: BenchmarkRunner<C>, ask_interactive: bool) -> Self {
        Self {
            kernels,
            runner,
            ask_interactive,
        }
    }

    pub fn kernels(&self) -> &KernelPair {
        &self.kernels
    }

    /// Run all three phases in order, writing the report to `out`
    pub fn run<G, R, W>(
        &self,
        generator: &mut WorkloadGenerator<G>,
        input: &mut R,
        out: &mut W,
    ) -> HarnessOutcome
    where
        G: Rng,
        R: BufRead,
        W: Write,
    {
        let mut outcome = HarnessOutcome::default();
        outcome.note_output(writeln!(
            out,
            "{}",
            FormatUtils::banner(&format!(
                "Car Acceleration Calculator\n  {} vs {} Performance Comparison",
                self.kernels.first.name(),
                self.kernels.second.name()
            ))
        ));

        info!(target: LOG_TARGET, "🔍 Starting {} phase", Phase::Correctness);
        match run_correctness(&self.kernels, out) {
            Ok(report) => outcome.correctness = Some(report),
            Err(e) => record_failure(&mut outcome, out, Phase::Correctness, e),
        }

        if self.ask_interactive {
            match ask_yes_no(input, out) {
                Ok(true) => {
                    info!(target: LOG_TARGET, "⌨️ Starting {} phase", Phase::Interactive);
                    match run_interactive(&self.kernels, input, out) {
                        Ok(report) => outcome.interactive = Some(report),
                        Err(e) => record_failure(&mut outcome, out, Phase::Interactive, e),
                    }
                }
                Ok(false) => info!(target: LOG_TARGET, "Interactive phase declined"),
                Err(e) => record_failure(&mut outcome, out, Phase::Interactive, e),
            }
        }

        info!(target: LOG_TARGET, "🚀 Starting {} phase", Phase::Performance);
        self.run_performance(generator, out, &mut outcome);

        let closing = performance::write_summary_table(out, &outcome.reports)
            .and_then(|_| writeln!(out))
            .and_then(|_| writeln!(out, "{}", FormatUtils::banner("All tests completed!")))
            .and_then(|_| out.flush());
        outcome.note_output(closing);
        outcome
    }

    /// Benchmark every configured size; a failing size is reported and skipped
    fn run_performance<G: Rng, W: Write>(
        &self,
        generator: &mut WorkloadGenerator<G>,
        out: &mut W,
        outcome: &mut HarnessOutcome,
    ) {
        outcome.note_output(
            writeln!(out, "\n")
                .and_then(|_| writeln!(out, "{}", FormatUtils::banner("PERFORMANCE BENCHMARKS"))),
        );

        for &size in &self.runner.config().sizes {
            let result = performance::write_size_header(out, size)
                .map_err(HarnessError::from)
                .and_then(|_| {
                    self.runner.run_size(
                        size,
                        generator,
                        self.kernels.first.as_ref(),
                        self.kernels.second.as_ref(),
                    )
                })
                .and_then(|report| {
                    performance::write_performance_report(out, &report)?;
                    Ok(report)
                });
            match result {
                Ok(report) => outcome.reports.push(report),
                Err(e) => record_failure(outcome, out, Phase::Performance, e),
            }
        }
    }
}

fn record_failure<W: Write>(outcome: &mut HarnessOutcome, out: &mut W, phase: Phase, err: HarnessError) {
    warn!(target: LOG_TARGET, "⚠️ {} phase aborted: {}", phase, err);
    outcome.note_output(writeln!(out, "{}!", err));
    outcome.failures.push(PhaseFailure {
        phase,
        message: err.to_string(),
    });
}

// Changelog:
// - v1.0.1 (2026-10-20): Report write failures.
//   - The first failed write is logged at warn and kept in HarnessOutcome.
// - v1.0.0 (2026-10-19): Initial harness.
//   - KernelPair (reference + unrolled by default), Phase, HarnessOutcome.
//   - Sequential phases with per-phase failure containment.
