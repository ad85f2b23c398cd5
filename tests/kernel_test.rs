// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/kernel_test.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// This file contains tests for the acceleration kernels. It checks the
// literal cases, equivalence of the reference and unrolled variants, and the
// documented behaviour for zero and negative durations.
//
// Tree Location:
// - tests/kernel_test.rs (kernel tests)
// - Depends on: accel-bench, rand

#[cfg(test)]
mod tests {
    use accel_bench::benchmark::jobs::{WorkloadGenerator, correctness_cases};
    use accel_bench::core::kernel::{AccelKernel, KMH_TO_MS, ReferenceKernel, reference_accel};
    use accel_bench::core::types::Sample;
    use accel_bench::core::unrolled::UnrolledKernel;
    use rand::{SeedableRng, rngs::StdRng};

    fn both(sample: &Sample) -> (i32, i32) {
        (ReferenceKernel.compute(sample), UnrolledKernel.compute(sample))
    }

    #[test]
    fn test_literal_cases() {
        let expected = [
            (Sample::new(0.0, 62.5, 10.1), 2),
            (Sample::new(60.0, 122.3, 5.5), 3),
            (Sample::new(30.0, 160.7, 7.8), 5),
        ];
        for (sample, result) in expected {
            assert_eq!(both(&sample), (result, result), "Wrong result for {:?}", sample);
        }
    }

    #[test]
    fn test_correctness_fixtures_agree_with_kernels() {
        for case in correctness_cases() {
            assert_eq!(reference_accel(&case.sample), case.expected);
            assert_eq!(UnrolledKernel.compute(&case.sample), case.expected);
        }
    }

    #[test]
    fn test_conversion_constant() {
        assert_eq!(KMH_TO_MS, 0.2777777778);
        // 36 km/h over one second is 10 m/s^2 after rounding
        assert_eq!(reference_accel(&Sample::new(0.0, 36.0, 1.0)), 10);
    }

    #[test]
    fn test_variants_equivalent_on_random_batches() {
        let mut generator = WorkloadGenerator::new(StdRng::seed_from_u64(7));
        let samples = generator.generate(10_003).unwrap();

        let mut reference = vec![0; samples.len()];
        let mut unrolled = vec![0; samples.len()];
        ReferenceKernel.compute_batch(&samples, &mut reference);
        UnrolledKernel.compute_batch(&samples, &mut unrolled);

        assert_eq!(reference, unrolled, "Batch results should be identical");
        for (sample, &r) in samples.iter().zip(&reference) {
            assert_eq!(UnrolledKernel.compute(sample), r);
        }
    }

    #[test]
    fn test_variants_equivalent_on_wide_inputs() {
        let values = [-250.0, -1.0, -0.0, 0.0, 0.3, 1.0, 9.9, 123.456, 1e6];
        let durations = [-7.5, -1.0, 0.001, 0.5, 1.0, 3.3, 14.99, 1e9];
        for &vi in &values {
            for &vf in &values {
                for &t in &durations {
                    let (a, b) = both(&Sample::new(vi, vf, t));
                    assert_eq!(a, b, "Variants disagree for vi={} vf={} t={}", vi, vf, t);
                }
            }
        }
    }

    #[test]
    fn test_kernel_is_idempotent() {
        let sample = Sample::new(12.0, 180.0, 4.2);
        let first = ReferenceKernel.compute(&sample);
        assert_eq!(ReferenceKernel.compute(&sample), first);
        assert_eq!(UnrolledKernel.compute(&sample), UnrolledKernel.compute(&sample));
    }

    #[test]
    fn test_zero_duration_saturates_identically() {
        // +inf saturates to i32::MAX, -inf to i32::MIN, NaN (0/0) to 0
        assert_eq!(both(&Sample::new(0.0, 50.0, 0.0)), (i32::MAX, i32::MAX));
        assert_eq!(both(&Sample::new(50.0, 0.0, 0.0)), (i32::MIN, i32::MIN));
        assert_eq!(both(&Sample::new(40.0, 40.0, 0.0)), (0, 0));
        assert_eq!(both(&Sample::new(0.0, 50.0, -0.0)), (i32::MIN, i32::MIN));
    }

    #[test]
    fn test_negative_duration_flips_sign() {
        let forward = both(&Sample::new(0.0, 62.5, 10.1));
        let backward = both(&Sample::new(0.0, 62.5, -10.1));
        assert_eq!(backward, (-forward.0, -forward.1));
    }

    #[test]
    fn test_batch_output_shorter_than_input() {
        let samples = vec![Sample::new(0.0, 36.0, 1.0); 6];
        let mut reference = vec![-1; 5];
        let mut unrolled = vec![-1; 5];
        ReferenceKernel.compute_batch(&samples, &mut reference);
        UnrolledKernel.compute_batch(&samples, &mut unrolled);
        assert_eq!(reference, vec![10; 5]);
        assert_eq!(unrolled, reference);
    }

    #[test]
    fn test_kernel_names() {
        assert_eq!(ReferenceKernel.name(), "Reference");
        assert_eq!(UnrolledKernel.name(), "Unrolled");
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial kernel tests.
//   - Literal cases, cross-variant equivalence, idempotence, zero/negative durations.
