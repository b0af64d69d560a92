use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use denoms::dynamic::{count_denoms_splits, sum_odd_splits, try_count_denoms_splits};

const DENOMS: [usize; 4] = [1, 5, 10, 25];

fn bench_count_denoms_splits(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_denoms_splits");
    for target in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("unchecked", target), &target, |b, &t| {
            b.iter(|| count_denoms_splits(black_box(&DENOMS), black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("checked", target), &target, |b, &t| {
            b.iter(|| try_count_denoms_splits(black_box(&DENOMS), black_box(t)))
        });
    }
    group.finish();
}

fn bench_sum_odd_splits(c: &mut Criterion) {
    c.bench_function("sum_odd_splits_1_to_100", |b| {
        b.iter(|| sum_odd_splits(black_box(&DENOMS), 1..=100))
    });
}

criterion_group!(benches, bench_count_denoms_splits, bench_sum_odd_splits);
criterion_main!(benches);
