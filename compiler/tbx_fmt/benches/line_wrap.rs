#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Line-wrap benchmarks.
//!
//! Measures wrapping throughput across message sizes, with and without
//! reflowing existing breaks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use tbx_fmt::{line_wrap, WrapConfig};
use tbx_ir::Locale;

/// Generate N sentences with a forced break every few sentences.
fn generate_message(n: usize) -> String {
    (0..n)
        .map(|i| {
            let sentence = format!("Sentence {i} of the #story# told by @.");
            if i % 5 == 4 {
                format!("{sentence}&")
            } else {
                format!("{sentence} ")
            }
        })
        .collect()
}

fn generate_japanese(n: usize) -> String {
    (0..n)
        .map(|_| "むかしむかし、あるところに ")
        .collect()
}

fn bench_english(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_wrap/english");
    group.measurement_time(Duration::from_secs(5));

    let config = WrapConfig::default();
    for size in &[1, 10, 100, 1000] {
        let text = generate_message(*size);
        group.bench_with_input(BenchmarkId::new("sentences", size), &text, |b, text| {
            b.iter(|| black_box(line_wrap(text, &config)));
        });
    }

    group.finish();
}

fn bench_reflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_wrap/reflow");
    group.measurement_time(Duration::from_secs(5));

    let config = WrapConfig::default();
    let reflow = config.strip_existing_lines().strip_existing_boxes();
    for size in &[10, 100, 1000] {
        let wrapped = line_wrap(&generate_message(*size), &config);
        group.bench_with_input(BenchmarkId::new("sentences", size), &wrapped, |b, text| {
            b.iter(|| black_box(line_wrap(text, &reflow)));
        });
    }

    group.finish();
}

fn bench_japanese(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_wrap/japanese");
    group.measurement_time(Duration::from_secs(5));

    let config = WrapConfig::for_locale(Locale::Japanese);
    for size in &[10, 100, 1000] {
        let text = generate_japanese(*size);
        group.bench_with_input(BenchmarkId::new("phrases", size), &text, |b, text| {
            b.iter(|| black_box(line_wrap(text, &config)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_english, bench_reflow, bench_japanese);
criterion_main!(benches);
