// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/unrolled.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file implements variant B of the acceleration kernel. It processes
// samples four at a time in independent lanes and rounds with its own
// trunc/fraction routine instead of f64::round. Results must stay
// bit-identical to the reference variant, so the arithmetic order
// (difference, scale, divide) is the same.
//
// Tree Location:
// - src/core/unrolled.rs (unrolled batch kernel)
// - Depends on: core/kernel, core/types

use crate::core::kernel::{AccelKernel, KMH_TO_MS};
use crate::core::types::Sample;

const LANES: usize = 4;

/// Variant B: four-lane unrolled batch evaluation
#[derive(Debug, Clone, Copy, Default)]
pub struct UnrolledKernel;

impl UnrolledKernel {
    pub fn new() -> Self {
        Self
    }
}

/// Round to nearest, ties away from zero.
///
/// `x - x.trunc()` is exact for every finite f64, so the comparison against
/// 0.5 never sees a rounded fraction. Infinities give a NaN fraction and fall
/// through unchanged, NaN stays NaN.
#[inline]
fn round_half_away(x: f64) -> f64 {
    let whole = x.trunc();
    let frac = x - whole;
    if frac >= 0.5 {
        whole + 1.0
    } else if frac <= -0.5 {
        whole - 1.0
    } else {
        whole
    }
}

#[inline]
fn lane(vi: f64, vf: f64, t: f64) -> i32 {
    round_half_away(((vf - vi) * KMH_TO_MS) / t) as i32
}

impl AccelKernel for UnrolledKernel {
    fn name(&self) -> &'static str {
        "Unrolled"
    }

    #[inline]
    fn compute(&self, sample: &Sample) -> i32 {
        lane(sample.initial_speed, sample.final_speed, sample.duration)
    }

    fn compute_batch(&self, samples: &[Sample], output: &mut [i32]) {
        let len = samples.len().min(output.len());
        let (samples, output) = (&samples[..len], &mut output[..len]);

        let mut sample_chunks = samples.chunks_exact(LANES);
        let mut output_chunks = output.chunks_exact_mut(LANES);

        for (chunk, out) in (&mut sample_chunks).zip(&mut output_chunks) {
            let mut diff = [0.0f64; LANES];
            for i in 0..LANES {
                diff[i] = (chunk[i].final_speed - chunk[i].initial_speed) * KMH_TO_MS;
            }
            for i in 0..LANES {
                out[i] = round_half_away(diff[i] / chunk[i].duration) as i32;
            }
        }

        for (sample, slot) in sample_chunks
            .remainder()
            .iter()
            .zip(output_chunks.into_remainder().iter_mut())
        {
            *slot = lane(sample.initial_speed, sample.final_speed, sample.duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_ties() {
        assert_eq!(round_half_away(2.5), 3.0);
        assert_eq!(round_half_away(-2.5), -3.0);
        assert_eq!(round_half_away(0.5), 1.0);
        assert_eq!(round_half_away(-0.5), -1.0);
        assert_eq!(round_half_away(2.4999999999999996), 2.0);
        assert_eq!(round_half_away(0.49999999999999994), 0.0);
    }

    #[test]
    fn test_round_half_away_matches_std_round() {
        let values = [
            0.0, -0.0, 1.0, 1.5, -1.5, 3.7, -3.7, 1e15 + 0.5, 4503599627370497.0,
            -4503599627370497.0, f64::MAX, f64::MIN, f64::EPSILON,
        ];
        for v in values {
            assert_eq!(round_half_away(v), v.round(), "mismatch for {}", v);
        }
    }

    #[test]
    fn test_round_half_away_non_finite() {
        assert_eq!(round_half_away(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_half_away(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(round_half_away(f64::NAN).is_nan());
    }

    #[test]
    fn test_batch_remainder_lanes() {
        let samples: Vec<Sample> = (0..7)
            .map(|i| Sample::new(0.0, 36.0 * (i as f64 + 1.0), 1.0))
            .collect();
        let mut output = vec![0; 7];
        UnrolledKernel.compute_batch(&samples, &mut output);
        assert_eq!(output, vec![10, 20, 30, 40, 50, 60, 70]);
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial unrolled kernel.
//   - Four-lane batch loop with scalar tail.
//   - Own round-half-away-from-zero routine, checked against f64::round.
