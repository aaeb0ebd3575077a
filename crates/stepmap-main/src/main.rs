// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


use serde::Serialize;
use std::{fs::File, io::BufWriter, time::Instant};
use stepmap_model::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    key_min: i64,
    key_max: i64,
    value_min: char,
    value_max: char,
    samples: usize,
    steps: usize,
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    instance: InstanceInfo,
    passed: bool,
    error: Option<String>,
    // Soak report snapshot; zero when the run failed.
    empty_ranges: usize,
    sample_keys: usize,
    final_boundaries: usize,
    peak_boundaries: usize,
    max_searches: usize,
    elapsed_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
struct SoakBenchmarkReport {
    description: String,
    search_budget: usize,
    instances: Vec<RunResult>,
}

fn interpolate_u(val0: usize, val1: usize, step: usize, steps: usize) -> usize {
    if steps <= 1 {
        return val1;
    }
    let num = (val1 as isize - val0 as isize) * step as isize;
    (val0 as isize + num / (steps as isize - 1)).max(0) as usize
}

fn main() {
    enable_tracing();

    type K = i64;

    // Ramp from small -> big across 10 instances
    let n_instances = 10usize;

    let min_steps = 1_000usize;
    let max_steps = 50_000usize;

    let min_samples = 100usize;
    let max_samples = 500usize;

    // Key span grows with the workload so boundaries do not saturate
    let min_span = 1_000usize;
    let max_span = 1_000_000usize;

    // Small alphabet, lots of merging
    let (value_min, value_max) = ('A', 'H');

    let mut results: Vec<RunResult> = Vec::with_capacity(n_instances);

    for i in 0..n_instances {
        let steps = interpolate_u(min_steps, max_steps, i, n_instances);
        let samples = interpolate_u(min_samples, max_samples, i, n_instances);
        let span = interpolate_u(min_span, max_span, i, n_instances) as K;

        // Deterministic seed per instance
        let seed: u64 = 42 + (i as u64);

        let cfg = WorkloadGenConfigBuilder::<K>::new()
            .key_range(-span, span)
            .value_range(value_min, value_max)
            .samples(samples)
            .steps(steps)
            .seed(seed)
            .build()
            .expect("valid workload config");

        let instance = InstanceInfo {
            idx: i,
            seed,
            key_min: cfg.key_min(),
            key_max: cfg.key_max(),
            value_min: cfg.value_min(),
            value_max: cfg.value_max(),
            samples: cfg.samples(),
            steps: cfg.steps(),
        };

        let t0 = Instant::now();
        let outcome = run_soak(&cfg);
        let elapsed = t0.elapsed();

        let result = match outcome {
            Ok(report) => RunResult {
                instance,
                passed: true,
                error: None,
                empty_ranges: report.empty_ranges,
                sample_keys: report.samples,
                final_boundaries: report.final_boundaries,
                peak_boundaries: report.peak_boundaries,
                max_searches: report.max_searches,
                elapsed_ms: elapsed.as_millis(),
            },
            Err(e) => {
                error!(idx = i, seed, "soak failed: {e}");
                RunResult {
                    instance,
                    passed: false,
                    error: Some(e.to_string()),
                    empty_ranges: 0,
                    sample_keys: 0,
                    final_boundaries: 0,
                    peak_boundaries: 0,
                    max_searches: 0,
                    elapsed_ms: elapsed.as_millis(),
                }
            }
        };
        info!(idx = i, passed = result.passed, elapsed_ms = %result.elapsed_ms, "instance done");
        results.push(result);
    }

    let failed = results.iter().filter(|r| !r.passed).count();

    // Serialize to JSON
    let report = SoakBenchmarkReport {
        description: "Interval store soak: 10 seeded instances from small to big; every assign checked against sample keys and the search budget.".into(),
        search_budget: SEARCH_BUDGET,
        instances: results,
    };

    let file = File::create("soak_results.json").expect("create soak_results.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    // Also print a short summary to stdout
    println!();
    println!("=================================================================");
    println!("=========================== Soak Done ===========================");
    println!("=================================================================");
    println!();
    for r in &report.instances {
        println!(
            "#{:<2} seed={:<3} steps={:<6} boundaries={:<6} peak={:<6} max_searches={} {}",
            r.instance.idx,
            r.instance.seed,
            r.instance.steps,
            r.final_boundaries,
            r.peak_boundaries,
            r.max_searches,
            if r.passed { "ok" } else { "FAILED" },
        );
    }
    println!();
    println!("{} of {} instances failed", failed, report.instances.len());
    println!("Wrote: soak_results.json");

    if failed > 0 {
        std::process::exit(1);
    }
}
