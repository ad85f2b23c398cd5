// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// This project, accel-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/bench_runner.rs
// Version: 1.0.1
// Developer: accel-bench contributors
//
// This file contains tests for the timer, the timing comparison and the
// benchmark runner. A scripted clock advances a fixed step per reading so
// timings are exact.
//
// Tree Location:
// - tests/bench_runner.rs (timer and runner tests)
// - Depends on: accel-bench, rand, serde_json

use accel_bench::HarnessError;
use accel_bench::benchmark::jobs::WorkloadGenerator;
use accel_bench::benchmark::profiler::{
    MAX_MISMATCH_EXAMPLES, VariantTiming, Verdict, compare_timings, verify_outputs,
};
use accel_bench::benchmark::runner::{BenchmarkConfig, BenchmarkRunner, BenchmarkSummary};
use accel_bench::benchmark::timer::{InstantClock, MonotonicClock, Timer};
use accel_bench::core::kernel::{AccelKernel, ReferenceKernel};
use accel_bench::core::types::{Batch, Sample};
use accel_bench::core::unrolled::UnrolledKernel;
use rand::{SeedableRng, rngs::StdRng};
use std::cell::Cell;
use std::time::Duration;

/// Clock that moves forward `step_micros` every time it is read
struct ScriptedClock {
    ticks: Cell<u64>,
    step_micros: u64,
}

impl ScriptedClock {
    fn new(step_micros: u64) -> Self {
        Self {
            ticks: Cell::new(0),
            step_micros,
        }
    }
}

impl MonotonicClock for ScriptedClock {
    fn now(&self) -> Duration {
        let now = self.ticks.get();
        self.ticks.set(now + self.step_micros);
        Duration::from_micros(now)
    }
}

/// Deliberately wrong kernel: every third result is off by one
struct SkewedKernel;

impl AccelKernel for SkewedKernel {
    fn name(&self) -> &'static str {
        "Skewed"
    }

    fn compute(&self, sample: &Sample) -> i32 {
        ReferenceKernel.compute(sample)
    }

    fn compute_batch(&self, samples: &[Sample], output: &mut [i32]) {
        for (i, (sample, slot)) in samples.iter().zip(output.iter_mut()).enumerate() {
            *slot = self.compute(sample) + i32::from(i % 3 == 0);
        }
    }
}

fn generator() -> WorkloadGenerator<StdRng> {
    WorkloadGenerator::new(StdRng::seed_from_u64(11))
}

#[test]
fn test_timer_measures_scripted_step() {
    let timer = Timer::new(ScriptedClock::new(7));
    let elapsed = timer.measure(|| 1 + 1);
    assert_eq!(elapsed, 7.0);
}

#[test]
fn test_instant_timer_is_non_negative() {
    let timer: Timer<InstantClock> = Timer::default();
    let elapsed = timer.measure(|| (0..10_000u64).sum::<u64>());
    assert!(elapsed >= 0.0);
    assert!(timer.clock().now() >= Duration::ZERO);
}

#[test]
fn test_thirty_runs_per_variant_with_exact_average() {
    let runner = BenchmarkRunner::with_clock(BenchmarkConfig::default(), ScriptedClock::new(5));
    assert_eq!(runner.config().runs, 30);

    for size in [1usize, 2, 10, 1000] {
        let report = runner
            .run_size(size, &mut generator(), &ReferenceKernel, &UnrolledKernel)
            .unwrap();
        for timing in [&report.first, &report.second] {
            assert_eq!(timing.runs, 30, "Expected 30 runs for size {}", size);
            assert_eq!(timing.total_micros, 150.0);
            assert_eq!(timing.average_micros(), timing.total_micros / 30.0);
        }
        assert_eq!(report.verdict, Verdict::Similar);
        assert!(report.verification.all_match());
        assert_eq!(report.verification.compared, size);
        assert_eq!(report.sample_inputs.len(), size.min(3));
        assert_eq!(report.sample_outputs.len(), size.min(3));
    }
}

#[test]
fn test_custom_run_count() {
    let config = BenchmarkConfig {
        runs: 4,
        sizes: vec![8],
    };
    let runner = BenchmarkRunner::with_clock(config, ScriptedClock::new(2));
    let report = runner
        .run_size(8, &mut generator(), &ReferenceKernel, &UnrolledKernel)
        .unwrap();
    assert_eq!(report.first.runs, 4);
    assert_eq!(report.first.total_micros, 8.0);
    assert_eq!(report.second.average_micros(), 2.0);
}

#[test]
fn test_time_variant_fills_batch_results() {
    let config = BenchmarkConfig {
        runs: 6,
        sizes: vec![5],
    };
    let runner = BenchmarkRunner::with_clock(config, ScriptedClock::new(4));
    let mut batch = Batch::new(vec![Sample::new(0.0, 36.0, 1.0); 5]).unwrap();

    let timing = runner.time_variant(&mut batch, &UnrolledKernel);
    assert_eq!(timing.name, "Unrolled");
    assert_eq!(timing.runs, 6);
    assert_eq!(timing.total_micros, 24.0);
    assert_eq!(batch.results(), &[10; 5], "Timed runs must still write results");
}

#[test]
fn test_summary_json_with_infinite_speedup() {
    let runner = BenchmarkRunner::with_clock(BenchmarkConfig::default(), ScriptedClock::new(1));
    let mut report = runner
        .run_size(4, &mut generator(), &ReferenceKernel, &UnrolledKernel)
        .unwrap();
    report.verdict = Verdict::Faster {
        winner: "Unrolled".to_string(),
        loser: "Reference".to_string(),
        speedup: f64::INFINITY,
    };
    let summary = BenchmarkSummary {
        seed: 77,
        runs: 30,
        reports: vec![report],
    };

    let json = serde_json::to_string(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["seed"], 77);
    assert_eq!(value["runs"], 30);

    let entry = &value["reports"][0];
    assert_eq!(entry["size"], 4);
    assert_eq!(entry["first"]["runs"], 30);
    assert_eq!(entry["verification"]["compared"], 4);
    assert_eq!(entry["sample_inputs"].as_array().map(Vec::len), Some(3));
    assert_eq!(entry["verdict"]["verdict"], "faster");
    assert_eq!(entry["verdict"]["winner"], "Unrolled");
    assert!(
        entry["verdict"]["speedup"].is_null(),
        "Infinite speedup has no JSON number form"
    );
}

#[test]
fn test_similar_verdict_json_tag() {
    let value = serde_json::to_value(Verdict::Similar).unwrap();
    assert_eq!(value, serde_json::json!({ "verdict": "similar" }));
}

#[test]
fn test_empty_workload_rejected() {
    let runner = BenchmarkRunner::with_clock(BenchmarkConfig::default(), ScriptedClock::new(1));
    let result = runner.run_size(0, &mut generator(), &ReferenceKernel, &UnrolledKernel);
    assert!(matches!(result, Err(HarnessError::EmptyWorkload)));
}

#[test]
fn test_mismatches_are_counted_and_capped() {
    let runner = BenchmarkRunner::with_clock(BenchmarkConfig::default(), ScriptedClock::new(1));
    let report = runner
        .run_size(10, &mut generator(), &ReferenceKernel, &SkewedKernel)
        .unwrap();

    // indices 0, 3, 6, 9 are skewed
    assert_eq!(report.verification.mismatches, 4);
    assert_eq!(report.verification.examples.len(), MAX_MISMATCH_EXAMPLES);
    let indices: Vec<usize> = report.verification.examples.iter().map(|m| m.index).collect();
    assert_eq!(indices, vec![0, 3, 6]);
    for m in &report.verification.examples {
        assert_eq!(m.second, m.first + 1);
    }
}

#[test]
fn test_compare_timings_verdicts() {
    let mut fast = VariantTiming::new("Fast");
    let mut slow = VariantTiming::new("Slow");
    for _ in 0..30 {
        fast.record(2.0);
        slow.record(3.0);
    }

    match compare_timings(&slow, &fast) {
        Verdict::Faster {
            winner,
            loser,
            speedup,
        } => {
            assert_eq!(winner, "Fast");
            assert_eq!(loser, "Slow");
            assert!((speedup - 1.5).abs() < 1e-12);
        }
        Verdict::Similar => panic!("Expected a faster variant"),
    }

    assert_eq!(compare_timings(&fast, &fast.clone()), Verdict::Similar);
}

#[test]
fn test_zero_winning_average_gives_infinite_speedup() {
    let mut instant = VariantTiming::new("Instant");
    instant.record(0.0);
    let mut slow = VariantTiming::new("Slow");
    slow.record(1.0);
    match compare_timings(&instant, &slow) {
        Verdict::Faster { speedup, .. } => assert!(speedup.is_infinite()),
        Verdict::Similar => panic!("Expected a faster variant"),
    }
}

#[test]
fn test_empty_timing_average_is_zero() {
    assert_eq!(VariantTiming::new("Idle").average_micros(), 0.0);
}

#[test]
fn test_verify_outputs_common_prefix() {
    let verification = verify_outputs(&[1, 2, 3, 4], &[1, 9, 3]);
    assert_eq!(verification.compared, 3);
    assert_eq!(verification.mismatches, 1);
    assert_eq!(verification.examples[0].index, 1);
    assert!(!verification.all_match());
}

// Changelog:
// - v1.0.1 (2026-10-20): Batch results after timing, JSON summary shape.
// - v1.0.0 (2026-10-19): Initial timer and runner tests.
