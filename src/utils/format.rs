// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file provides utility functions for formatting benchmark figures in
// accel-bench, located in the utils subdirectory. It formats elapsed times,
// speedup ratios, counts and section banners for logs and reports.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

/// Width of the `=` rule drawn around section banners
pub const BANNER_WIDTH: usize = 45;

/// Utility functions for formatting benchmark output
pub struct FormatUtils;

impl FormatUtils {
    /// Format microseconds in appropriate units (us, ms, s)
    pub fn format_micros(micros: f64) -> String {
        if micros >= 1_000_000.0 {
            format!("{:.2} s", micros / 1_000_000.0)
        } else if micros >= 1_000.0 {
            format!("{:.2} ms", micros / 1_000.0)
        } else {
            format!("{:.4} us", micros)
        }
    }

    /// Format a speedup ratio, e.g. "1.53x"
    pub fn format_speedup(ratio: f64) -> String {
        if ratio.is_finite() {
            format!("{:.2}x", ratio)
        } else {
            "inf".to_string()
        }
    }

    /// Format large numbers with suffixes (K, M, B)
    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Three-line section banner: rule, indented title, rule
    pub fn banner(title: &str) -> String {
        let rule = "=".repeat(BANNER_WIDTH);
        format!("{rule}\n  {title}\n{rule}")
    }

    /// Pass/fail marker used throughout the report
    pub fn mark(ok: bool) -> &'static str {
        if ok { "[YES]" } else { "[NO]" }
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial formatting helpers.
//   - Microsecond scaling, speedup ratios, K/M/B counts, banners and marks.
