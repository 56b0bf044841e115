//! Performance benchmarks for the analysis pipeline
//!
//! The sort dominates for large inputs; these benches track the full
//! analyze path and the reader separately so a regression in either shows
//! up on its own.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use latency_result_analyzer::{
    reader::{ProgressLine, ResultReader},
    stats::StatisticsEngine,
};
use std::io::Write;

/// Pseudo-random latency samples, deterministic across runs
fn synthetic_samples(n: usize) -> Vec<f64> {
    let mut state: u64 = 0x9e3779b97f4a7c15;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            // Map to a plausible latency range in milliseconds
            0.1 + (state >> 11) as f64 / (1u64 << 53) as f64 * 50.0
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let engine = StatisticsEngine::new();
    let samples = synthetic_samples(100_000);

    c.bench_function("analyze_100k_samples", |b| {
        b.iter_batched(
            || samples.clone(),
            |samples| engine.analyze(samples).unwrap(),
            BatchSize::LargeInput,
        )
    });

    let mut sorted = samples.clone();
    sorted.sort_by(f64::total_cmp);
    c.bench_function("analyze_sorted_100k_samples", |b| {
        b.iter(|| engine.analyze_sorted(&sorted).unwrap())
    });
}

fn bench_reader(c: &mut Criterion) {
    let samples = synthetic_samples(50_000);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "latency:{}", samples.len() + 1).unwrap();
    writeln!(file, "1.0").unwrap();
    for v in &samples {
        writeln!(file, "{}", v).unwrap();
    }
    file.flush().unwrap();

    c.bench_function("read_50k_sample_file", |b| {
        b.iter(|| {
            let mut progress = ProgressLine::new(std::io::sink(), false);
            ResultReader::new().read(file.path(), &mut progress).unwrap()
        })
    });
}

criterion_group!(benches, bench_analyze, bench_reader);
criterion_main!(benches);
