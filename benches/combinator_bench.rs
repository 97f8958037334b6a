//! Benchmark for the combinators.
//!
//! Compares `apply` and `match_with` with the equivalent hand-written
//! `Option` code, to show that classification and dispatch cost nothing at
//! run time.

use criterion::{Criterion, criterion_group, criterion_main};
use lambars_maybe::combinator::{apply, match_with};
use lambars_maybe::maybe::Maybe;
use std::hint::black_box;

fn weighted(left: i64, right: i64, weight: i64) -> i64 {
    left * weight + right
}

// =============================================================================
// 1. apply
// =============================================================================

fn benchmark_apply(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("apply_three_arguments");

    group.bench_function("apply", |bencher| {
        bencher.iter(|| {
            let mut total = 0_i64;
            for index in 0..1000_i64 {
                let left = if index % 5 == 0 { Maybe::empty() } else { Maybe::of(index) };
                total += apply(weighted)
                    .to((black_box(left), Maybe::of(black_box(index)), 3_i64))
                    .value_or(0);
            }
            black_box(total)
        });
    });

    group.bench_function("option_zip", |bencher| {
        bencher.iter(|| {
            let mut total = 0_i64;
            for index in 0..1000_i64 {
                let left = if index % 5 == 0 { None } else { Some(index) };
                total += black_box(left)
                    .zip(Some(black_box(index)))
                    .map(|(left, right)| weighted(left, right, 3))
                    .unwrap_or(0);
            }
            black_box(total)
        });
    });

    group.finish();
}

// =============================================================================
// 2. match_with
// =============================================================================

fn benchmark_match_with(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("match_with");

    let double = |value: f64| value * 2.0;
    let fallback = || -1.0;

    group.bench_function("match_with", |bencher| {
        bencher.iter(|| {
            let mut total = 0.0;
            for index in 0..1000_u32 {
                let value = if index % 3 == 0 { Maybe::empty() } else { Maybe::of(f64::from(index)) };
                total += match_with(double, fallback).to((black_box(value),)).value_or(0.0);
            }
            black_box(total)
        });
    });

    group.bench_function("option_match", |bencher| {
        bencher.iter(|| {
            let mut total = 0.0;
            for index in 0..1000_u32 {
                let value = if index % 3 == 0 { None } else { Some(f64::from(index)) };
                total += match black_box(value) {
                    Some(value) => double(value),
                    None => fallback(),
                };
            }
            black_box(total)
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, benchmark_apply, benchmark_match_with);

criterion_main!(benches);
