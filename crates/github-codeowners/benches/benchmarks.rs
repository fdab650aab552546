//! Benchmarks for github-codeowners
//!
//! Run with: cargo bench -p github-codeowners --features generate
//!
//! Filter benchmarks:
//!   cargo bench -- "parsing"
//!   cargo bench -- "writing"

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use github_codeowners::write::{WriterConfig, write_codeowners_with_config};
use github_codeowners::{parse_codeowners, write_codeowners};

use fixtures::{fixtures, fixtures_extended};

/// Benchmark parsing across all fixture sizes
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for (name, content) in fixtures() {
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse_codeowners", name),
            content,
            |b, input| b.iter(|| parse_codeowners(std::hint::black_box(input))),
        );
    }
    group.finish();
}

/// Benchmark parsing with extended sizes (up to 3MB)
fn bench_parsing_extended(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing/extended");
    group.sample_size(10);

    for (name, content) in fixtures_extended() {
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse_codeowners", name),
            content,
            |b, input| b.iter(|| parse_codeowners(std::hint::black_box(input))),
        );
    }
    group.finish();
}

/// Benchmark writing, with and without the size check
fn bench_writing(c: &mut Criterion) {
    let mut group = c.benchmark_group("writing");
    let unchecked = WriterConfig::new().with_validate_size(false);

    for (name, content) in fixtures_extended() {
        let file = parse_codeowners(content);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("write_codeowners", name),
            &file,
            |b, file| b.iter(|| write_codeowners(std::hint::black_box(file))),
        );
        group.bench_with_input(
            BenchmarkId::new("write_codeowners/unchecked", name),
            &file,
            |b, file| {
                b.iter(|| write_codeowners_with_config(std::hint::black_box(file), &unchecked))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parsing, bench_parsing_extended, bench_writing);
criterion_main!(benches);
