//! Benchmarks for RC4 engine operations.
//!
//! Measures key-schedule initialization, keystream generation
//! throughput, and the cost of full-snapshot trace capture across
//! input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tinyrc4::{Rc4, TraceLevel};

/// Key used consistently across all benchmarks.
const BENCH_KEY: &[u8] = b"BenchmarkKey2024";

/// Benchmarks `Rc4::new()` initialization time.
///
/// Measures the full key schedule: 256 table swaps plus 257 trace
/// record appends.
fn bench_ksa_init(c: &mut Criterion) {
    c.bench_function("ksa_init", |b| {
        b.iter(|| {
            let engine = Rc4::new(black_box(BENCH_KEY)).unwrap();
            black_box(engine);
        });
    });
}

/// Benchmarks keystream generation throughput at the default trace
/// level.
///
/// The engine is initialized once and the table advances naturally
/// between iterations, reflecting repeated derivations on one session.
fn bench_keystream(c: &mut Criterion) {
    let input = vec![0u8; 1024];
    let mut engine = Rc4::new(BENCH_KEY).unwrap();

    let mut group = c.benchmark_group("keystream_1024");
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("steps_level", |b| {
        b.iter(|| {
            engine.keystream(black_box(&input));
        });
    });

    group.finish();
}

/// Benchmarks the transform (XOR pass) against a held keystream.
fn bench_transform(c: &mut Criterion) {
    let input = vec![0u8; 1024];
    let mut engine = Rc4::new(BENCH_KEY).unwrap();
    engine.keystream(&input);

    let mut group = c.benchmark_group("transform_1024");
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("xor", |b| {
        b.iter(|| {
            let output = engine.transform(black_box(&input)).unwrap();
            black_box(output);
        });
    });

    group.finish();
}

/// Benchmarks keystream generation across trace levels and input sizes.
///
/// Compares the index-only trace against full per-step table snapshots
/// to show the capture overhead the snapshot level adds.
fn bench_trace_levels(c: &mut Criterion) {
    let input_sizes: &[usize] = &[64, 256, 1024];

    let mut group = c.benchmark_group("keystream_trace_levels");

    for &size in input_sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("steps", size),
            &input,
            |b, input| {
                let mut engine = Rc4::new(BENCH_KEY).unwrap();
                b.iter(|| {
                    engine.keystream(black_box(input));
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("full", size),
            &input,
            |b, input| {
                let mut engine = Rc4::with_trace_level(BENCH_KEY, TraceLevel::Full).unwrap();
                b.iter(|| {
                    engine.keystream(black_box(input));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ksa_init,
    bench_keystream,
    bench_transform,
    bench_trace_levels,
);
criterion_main!(benches);
