//! 工具函数性能基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minilinker::utils::{generate_short_code, short_code_from_fraction, validate_url};
use std::hint::black_box;

// ============== validate_url 基准测试 ==============

fn bench_validate_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/validate_url");

    group.bench_function("valid_simple", |b| {
        b.iter(|| {
            assert!(validate_url(black_box("https://example.com")).is_ok());
        });
    });

    group.bench_function("valid_with_path", |b| {
        b.iter(|| {
            assert!(validate_url(black_box("https://example.com/a/b/c?x=1&y=2")).is_ok());
        });
    });

    group.bench_function("invalid_no_scheme", |b| {
        b.iter(|| {
            assert!(validate_url(black_box("example.com")).is_err());
        });
    });

    group.bench_function("invalid_empty", |b| {
        b.iter(|| {
            assert!(validate_url(black_box("")).is_err());
        });
    });

    // 长 URL
    let long_url = format!("https://example.com/{}", "segment/".repeat(64));
    group.bench_function("valid_long", |b| {
        b.iter(|| {
            assert!(validate_url(black_box(&long_url)).is_ok());
        });
    });

    group.finish();
}

// ============== generate_short_code 基准测试 ==============

fn bench_generate_short_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/generate_short_code");

    for length in [4usize, 6, 12] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &len| {
            b.iter(|| generate_short_code(black_box(len)));
        });
    }

    group.bench_function("from_fraction", |b| {
        b.iter(|| short_code_from_fraction(black_box(0.123456789), black_box(6)));
    });

    group.finish();
}

criterion_group!(benches, bench_validate_url, bench_generate_short_code);
criterion_main!(benches);
