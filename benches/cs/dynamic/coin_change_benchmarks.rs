use coinchange::{count_change_ways, greedy_change, optimal_change, Denominations, MinCoinTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const US_COINS: [usize; 6] = [1, 5, 10, 25, 50, 100];
const SPARSE_COINS: [usize; 4] = [7, 11, 13, 29];

fn bench_optimal_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimal_change");
    for &amount in &[1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("us_coins", amount), &amount, |b, &amount| {
            b.iter(|| optimal_change(black_box(amount), black_box(&US_COINS)))
        });
        group.bench_with_input(BenchmarkId::new("sparse", amount), &amount, |b, &amount| {
            b.iter(|| optimal_change(black_box(amount), black_box(&SPARSE_COINS)))
        });
    }
    group.finish();
}

fn bench_greedy_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_change");
    for &amount in &[1_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(amount), &amount, |b, &amount| {
            b.iter(|| greedy_change(black_box(amount), black_box(&US_COINS)))
        });
    }
    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    let coins = Denominations::new(&SPARSE_COINS).unwrap();
    c.bench_function("min_coin_table_10k", |b| {
        b.iter(|| MinCoinTable::build(black_box(10_000), &coins))
    });
    c.bench_function("count_change_ways_10k", |b| {
        b.iter(|| count_change_ways(black_box(10_000), black_box(&US_COINS)))
    });
}

criterion_group!(
    benches,
    bench_optimal_change,
    bench_greedy_change,
    bench_table_build
);
criterion_main!(benches);
