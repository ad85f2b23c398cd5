// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/harness/interactive.rs
// Version: 1.0.1
// Developer: accel-bench contributors
//
// This file implements the optional interactive phase. The user types a
// record count and then one `Vi,Vf,T` line per record; both kernel variants
// run over the typed samples and every record is marked match/mismatch.
//
// A malformed record line is reported and only that record is asked for
// again. A malformed count, a failed allocation or a closed input stream
// aborts the phase.
//
// Tree Location:
// - src/harness/interactive.rs (interactive phase)
// - Depends on: core, utils/format

use crate::core::error::HarnessError;
use crate::core::types::{Batch, Sample};
use crate::harness::KernelPair;
use crate::utils::format::FormatUtils;
use log::{debug, info};
use std::io::{BufRead, Write};

const LOG_TARGET: &str = "accel_bench::interactive";

/// Typed samples with both variants' results
#[derive(Debug, Clone)]
pub struct InteractiveReport {
    pub samples: Vec<Sample>,
    pub first: Vec<i32>,
    pub second: Vec<i32>,
}

impl InteractiveReport {
    pub fn mismatches(&self) -> usize {
        self.first
            .iter()
            .zip(&self.second)
            .filter(|(a, b)| a != b)
            .count()
    }
}

/// Read one line, treating end of input as a closed stream.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so a garbled line fails
/// parsing like any other malformed record instead of ending the phase.
fn read_line<R: BufRead>(input: &mut R) -> Result<String, HarnessError> {
    let mut raw = Vec::new();
    if input.read_until(b'\n', &mut raw)? == 0 {
        return Err(HarnessError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Read lines until one is not blank
fn read_non_blank_line<R: BufRead>(input: &mut R) -> Result<String, HarnessError> {
    loop {
        let line = read_line(input)?;
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }
}

/// Ask the y/n question gating the interactive phase.
///
/// Only the first non-blank character counts; end of input means "no".
pub fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool, HarnessError> {
    write!(out, "\n\nWould you like to test with custom input? (y/n): ")?;
    out.flush()?;
    let answer = match read_line(input) {
        Ok(line) => line,
        Err(HarnessError::InputClosed) => return Ok(false),
        Err(e) => return Err(e),
    };
    Ok(matches!(answer.trim_start().chars().next(), Some('y' | 'Y')))
}

/// Parse `Vi,Vf,T`; commas and whitespace both separate values.
///
/// Tokens after the third value are ignored.
pub fn parse_sample_line(line: &str) -> Option<Sample> {
    let mut values = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<f64>);
    let initial_speed = values.next()?.ok()?;
    let final_speed = values.next()?.ok()?;
    let duration = values.next()?.ok()?;
    Some(Sample::new(initial_speed, final_speed, duration))
}

/// Parse a strictly positive record count from the leading integer of `line`.
///
/// Text after the digits is ignored, so "3 cars" reads as 3.
pub fn parse_count(line: &str) -> Result<usize, HarnessError> {
    let trimmed = line.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    match unsigned[..digits_end].parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(HarnessError::InvalidCount(trimmed.to_string())),
    }
}

/// Prompt for `count` records, asking again for any malformed line
pub fn read_samples<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    count: usize,
) -> Result<Vec<Sample>, HarnessError> {
    let mut samples = Vec::new();
    samples
        .try_reserve_exact(count)
        .map_err(|_| HarnessError::allocation(count))?;

    writeln!(out, "\nEnter data for each car (Vi, Vf, T):")?;
    writeln!(out, "Format: Vi,Vf,T (separated by commas)")?;
    writeln!(out, "Example: 0.0,62.5,10.1\n")?;

    while samples.len() < count {
        write!(out, "Car {}: ", samples.len() + 1)?;
        out.flush()?;
        let line = read_line(input)?;
        match parse_sample_line(&line) {
            Some(sample) => samples.push(sample),
            None => {
                debug!(target: LOG_TARGET, "Rejected record line {:?}", line.trim_end());
                writeln!(out, "Invalid format! Please use: Vi,Vf,T")?;
            }
        }
    }
    Ok(samples)
}

/// Run the interactive phase end to end
pub fn run_interactive<R: BufRead, W: Write>(
    kernels: &KernelPair,
    input: &mut R,
    out: &mut W,
) -> Result<InteractiveReport, HarnessError> {
    writeln!(out)?;
    writeln!(out, "{}", FormatUtils::banner("USER INPUT TEST"))?;
    write!(out, "Enter number of cars: ")?;
    out.flush()?;

    let count = parse_count(&read_non_blank_line(input)?)?;
    info!(target: LOG_TARGET, "📝 Reading {} records from input", count);

    let samples = read_samples(input, out, count)?;
    let mut first = Batch::new(samples)?;
    let mut second = first.try_clone_samples()?;
    first.evaluate(kernels.first.as_ref());
    second.evaluate(kernels.second.as_ref());

    let report = InteractiveReport {
        samples: first.samples().to_vec(),
        first: first.results().to_vec(),
        second: second.results().to_vec(),
    };
    write_interactive_report(out, kernels, &report)?;
    Ok(report)
}

pub fn write_interactive_report<W: Write>(
    out: &mut W,
    kernels: &KernelPair,
    report: &InteractiveReport,
) -> Result<(), HarnessError> {
    let (a, b) = (kernels.first.name(), kernels.second.name());
    writeln!(out, "\n--- Results ---")?;
    writeln!(out, "------------------------------------------------")?;
    for (i, sample) in report.samples.iter().enumerate() {
        let (ra, rb) = (report.first[i], report.second[i]);
        writeln!(
            out,
            "Car {}: Vi={:.1}, Vf={:.1}, T={:.1}",
            i + 1,
            sample.initial_speed,
            sample.final_speed,
            sample.duration
        )?;
        writeln!(
            out,
            "  {}: {} m/s^2 | {}: {} m/s^2 [{} {}]",
            a,
            ra,
            b,
            rb,
            FormatUtils::mark(ra == rb),
            if ra == rb { "Match" } else { "Mismatch" }
        )?;
    }
    writeln!(out, "------------------------------------------------")?;
    Ok(())
}

// Changelog:
// - v1.0.1 (2026-10-20): Input leniency fixes.
//   - Lines with invalid UTF-8 are re-prompted instead of aborting the phase.
//   - Count prompt skips blank lines and reads the leading integer only.
// - v1.0.0 (2026-10-19): Initial interactive phase.
//   - y/n gate, count prompt, per-record re-prompt on malformed lines.
//   - Comma or whitespace separated values, extra tokens ignored.
