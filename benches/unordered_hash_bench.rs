//! Unordered hash benchmark.
//!
//! Measures the cost of hashing a collection without regard to order:
//! combining precomputed codes, and hashing elements end to end with each
//! element hasher selected by the crate features.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use setwise::hashing::{SET_SEED, UnorderedHasher, unordered_hash, unordered_hash_of};
use std::hint::black_box;

const SIZES: [u32; 4] = [10, 100, 1000, 10000];

fn benchmark_combine_codes(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unordered_hash_combine_codes");

    for size in SIZES {
        let codes: Vec<u32> = (0..size).map(|index| index.wrapping_mul(0x9e37_79b9)).collect();
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::new("unordered_hash", size), &codes, |bencher, codes| {
            bencher.iter(|| black_box(unordered_hash(black_box(codes).iter().copied(), SET_SEED)));
        });
        group.bench_with_input(BenchmarkId::new("hasher_write", size), &codes, |bencher, codes| {
            bencher.iter(|| {
                let mut hasher = UnorderedHasher::new(SET_SEED);
                for &code in black_box(codes) {
                    hasher.write(code);
                }
                black_box(hasher.finish())
            });
        });
    }

    group.finish();
}

fn benchmark_hash_elements(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unordered_hash_elements");

    for size in SIZES {
        let integers: Vec<u64> = (0..u64::from(size)).collect();
        let strings: Vec<String> = (0..size).map(|index| format!("element-{index}")).collect();
        group.throughput(Throughput::Elements(u64::from(size)));

        group.bench_with_input(BenchmarkId::new("u64", size), &integers, |bencher, integers| {
            bencher.iter(|| black_box(unordered_hash_of::<u64, _>(black_box(integers), SET_SEED)));
        });
        group.bench_with_input(BenchmarkId::new("string", size), &strings, |bencher, strings| {
            bencher.iter(|| black_box(unordered_hash_of::<String, _>(black_box(strings), SET_SEED)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_combine_codes, benchmark_hash_elements);
criterion_main!(benches);
