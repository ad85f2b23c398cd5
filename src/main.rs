// Car Acceleration Benchmark - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.0.0
// Developer: accel-bench contributors
//
// Runs the correctness, interactive and performance phases in sequence. The
// process exits 0 once the phases have run, whatever their outcome.

use accel_bench::{
    BenchmarkConfig, BenchmarkRunner, Harness, KernelPair,
    benchmark::{WorkloadGenerator, runner::BenchmarkSummary},
    core::types::Args,
    utils::logging::init_logging,
};
use anyhow::Context;
use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::{self, Write};

const LOG_TARGET: &str = "accel_bench::main";

fn main() {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    if let Err(err) = run(&args) {
        eprintln!("❌ {:#}", err);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let level = args.level_filter().map_err(anyhow::Error::msg)?;
    if let Err(err) = init_logging(level) {
        eprintln!("⚠️ Logging disabled: {}", err);
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    info!(target: LOG_TARGET, "🎲 Workload seed: {} (rerun with --seed {} to reproduce)", seed, seed);
    info!(target: LOG_TARGET, "🔁 Runs per variant: {} | Sizes: {:?}", args.runs, args.sizes);

    let config = BenchmarkConfig {
        runs: args.runs,
        sizes: args.sizes.clone(),
    };
    let harness = Harness::new(
        KernelPair::default(),
        BenchmarkRunner::new(config),
        !args.skip_interactive,
    );
    let mut generator = WorkloadGenerator::new(StdRng::seed_from_u64(seed));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = harness.run(&mut generator, &mut input, &mut out);
    info!(target: LOG_TARGET,
        "📊 Finished: {} sizes benchmarked, {} aborted phase steps",
        outcome.reports.len(),
        outcome.failures.len()
    );

    if args.json {
        let summary = BenchmarkSummary {
            seed,
            runs: args.runs,
            reports: outcome.reports,
        };
        let json = serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
        writeln!(out, "{}", json).context("failed to write JSON summary")?;
    }
    Ok(())
}
