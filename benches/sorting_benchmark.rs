use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use seqkit::prelude::*;
use std::hint::black_box;

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Integer Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("shell_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| shell_sort(black_box(&mut data), u64::cmp),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("heap_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| heap_sort(black_box(&mut data), u64::cmp),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("merge_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| merge_sort(black_box(&mut data), u64::cmp),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 5_000;
    let input: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();

    group.bench_function("shell_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| shell_sort(black_box(&mut data), String::cmp),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("heap_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| heap_sort(black_box(&mut data), String::cmp),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("merge_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| merge_sort(black_box(&mut data), String::cmp),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// Bubble sort benchmarked separately on a small input; at 10k elements
// the quadratic passes dominate the whole run.
fn bench_bubble_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bubble Sort (small)");
    group.sample_size(10);

    let mut rng = rand::rng();
    let random: Vec<u64> = (0..500).map(|_| rng.random()).collect();
    let sorted: Vec<u64> = (0..500).collect();

    group.bench_function("random input", |b| {
        b.iter_batched(
            || random.clone(),
            |mut data| bubble_sort(black_box(&mut data), u64::cmp),
            BatchSize::SmallInput,
        )
    });

    // Adaptive case: a single pass and out.
    group.bench_function("sorted input", |b| {
        b.iter_batched(
            || sorted.clone(),
            |mut data| bubble_sort(black_box(&mut data), u64::cmp),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_integers, bench_strings, bench_bubble_small);
criterion_main!(benches);
