// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/kernel.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file defines the acceleration kernel capability and the reference
// variant. A kernel maps one (Vi, Vf, T) sample to a rounded acceleration in
// m/s^2: round(((Vf - Vi) * 0.2777777778) / T).
//
// Division by zero is not special-cased. The quotient becomes +inf, -inf or
// NaN and the saturating f64 -> i32 cast turns those into i32::MAX, i32::MIN
// and 0 respectively. Every variant must reproduce that exactly.
//
// Tree Location:
// - src/core/kernel.rs (kernel trait and reference implementation)
// - Depends on: core/types

use crate::core::types::Sample;

/// km/h to m/s conversion factor, kept at the ten-digit literal precision
pub const KMH_TO_MS: f64 = 0.2777777778;

/// Capability shared by every acceleration kernel variant
pub trait AccelKernel {
    /// Short display name used in reports
    fn name(&self) -> &'static str;

    /// Compute the rounded acceleration for a single sample
    fn compute(&self, sample: &Sample) -> i32;

    /// Compute accelerations for a whole batch.
    ///
    /// `output` must be at least as long as `samples`; extra slots are left
    /// untouched.
    fn compute_batch(&self, samples: &[Sample], output: &mut [i32]) {
        for (sample, slot) in samples.iter().zip(output.iter_mut()) {
            *slot = self.compute(sample);
        }
    }
}

/// Variant A: direct scalar evaluation with `f64::round`
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceKernel;

impl ReferenceKernel {
    pub fn new() -> Self {
        Self
    }
}

impl AccelKernel for ReferenceKernel {
    fn name(&self) -> &'static str {
        "Reference"
    }

    #[inline]
    fn compute(&self, sample: &Sample) -> i32 {
        let diff = sample.final_speed - sample.initial_speed;
        let diff_ms = diff * KMH_TO_MS;
        let accel = diff_ms / sample.duration;
        accel.round() as i32
    }
}

/// Convenience wrapper around the reference kernel for one-off evaluations
pub fn reference_accel(sample: &Sample) -> i32 {
    ReferenceKernel.compute(sample)
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial kernel implementation.
//   - Added AccelKernel trait with a default per-sample batch loop.
//   - Added ReferenceKernel (round half away from zero, saturating cast).
