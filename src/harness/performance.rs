// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/harness/performance.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file renders the performance phase: one section per workload size
// with timings, the verdict, output verification and sample results, and a
// summary table across all sizes.
//
// Tree Location:
// - src/harness/performance.rs (performance report rendering)
// - Depends on: benchmark, utils/format

use crate::benchmark::profiler::Verdict;
use crate::benchmark::runner::PerformanceReport;
use crate::utils::format::FormatUtils;
use std::io::{self, Write};

/// Header printed before a workload is generated
pub fn write_size_header<W: Write>(out: &mut W, size: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", FormatUtils::banner(&format!("PERFORMANCE TEST: {} cars", size)))?;
    writeln!(out, "Generating random test data...")
}

/// Print everything measured for one workload size
pub fn write_performance_report<W: Write>(out: &mut W, report: &PerformanceReport) -> io::Result<()> {
    writeln!(out, "\nSample Input (first {} cars):", report.sample_inputs.len())?;
    for (i, s) in report.sample_inputs.iter().enumerate() {
        writeln!(
            out,
            "  Car {}: Vi={:.2} km/h, Vf={:.2} km/h, T={:.2} s",
            i + 1,
            s.initial_speed,
            s.final_speed,
            s.duration
        )?;
    }

    for timing in [&report.first, &report.second] {
        writeln!(out, "\n--- {} Implementation ---", timing.name)?;
        writeln!(
            out,
            "Total time ({} runs): {:.2} microseconds",
            timing.runs, timing.total_micros
        )?;
        writeln!(
            out,
            "Average time per run: {:.4} microseconds",
            timing.average_micros()
        )?;
    }

    writeln!(out, "\n--- Performance Comparison ---")?;
    match &report.verdict {
        Verdict::Faster { winner, speedup, .. } => {
            writeln!(
                out,
                "{} {} is FASTER by {}",
                FormatUtils::mark(true),
                winner,
                FormatUtils::format_speedup(*speedup)
            )?;
            writeln!(
                out,
                "  {}: {:.4} us | {}: {:.4} us",
                report.first.name,
                report.first.average_micros(),
                report.second.name,
                report.second.average_micros()
            )?;
        }
        Verdict::Similar => writeln!(out, "Both have similar performance")?,
    }

    writeln!(out, "\n--- Verification ---")?;
    for m in &report.verification.examples {
        writeln!(
            out,
            "Mismatch at car {}: {}={}, {}={}",
            m.index + 1,
            report.first.name,
            m.first,
            report.second.name,
            m.second
        )?;
    }
    if report.verification.all_match() {
        writeln!(
            out,
            "{} All {} results match!",
            FormatUtils::mark(true),
            report.verification.compared
        )?;
    } else {
        writeln!(
            out,
            "{} Found {} mismatches out of {}",
            FormatUtils::mark(false),
            report.verification.mismatches,
            report.verification.compared
        )?;
    }

    writeln!(out, "\nSample Outputs (first {} cars):", report.sample_outputs.len())?;
    for (i, (a, b)) in report.sample_outputs.iter().enumerate() {
        writeln!(
            out,
            "  Car {}: {}={} m/s^2, {}={} m/s^2 [{}]",
            i + 1,
            report.first.name,
            a,
            report.second.name,
            b,
            FormatUtils::mark(a == b)
        )?;
    }
    Ok(())
}

/// Print one line per workload size: both averages and the faster variant
pub fn write_summary_table<W: Write>(out: &mut W, reports: &[PerformanceReport]) -> io::Result<()> {
    if reports.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{}", FormatUtils::banner("SUMMARY"))?;
    writeln!(
        out,
        "{:>10} | {:>14} | {:>14} | {}",
        "Cars", reports[0].first.name, reports[0].second.name, "Faster"
    )?;
    for report in reports {
        let faster = match &report.verdict {
            Verdict::Faster { winner, speedup, .. } => {
                format!("{} ({})", winner, FormatUtils::format_speedup(*speedup))
            }
            Verdict::Similar => "similar".to_string(),
        };
        writeln!(
            out,
            "{:>10} | {:>14} | {:>14} | {}",
            report.size,
            FormatUtils::format_micros(report.first.average_micros()),
            FormatUtils::format_micros(report.second.average_micros()),
            faster
        )?;
    }
    Ok(())
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial performance report rendering.
//   - Per-size sections and a cross-size summary table.
