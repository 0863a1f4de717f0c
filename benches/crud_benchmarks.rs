use aka_tree::RBTree;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;
use std::hint::black_box;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn key_orders() -> [(&'static str, Vec<i64>); 3] {
    [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ]
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("insert_{order}"));

        group.bench_function(BenchmarkId::new("RBTree", N), |b| {
            b.iter(|| {
                let mut tree = RBTree::new();
                for &key in &keys {
                    tree.insert(key);
                }
                tree
            });
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &key in &keys {
                    set.insert(key);
                }
                set
            });
        });

        group.finish();
    }
}

fn bench_contains(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("contains_{order}"));
        let tree: RBTree<i64> = keys.iter().copied().collect();
        let set: BTreeSet<i64> = keys.iter().copied().collect();

        group.bench_function(BenchmarkId::new("RBTree", N), |b| {
            b.iter(|| keys.iter().filter(|key| tree.contains(black_box(key))).count());
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| keys.iter().filter(|key| set.contains(black_box(key))).count());
        });

        group.finish();
    }
}

fn bench_delete(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("delete_{order}"));
        let set: BTreeSet<i64> = keys.iter().copied().collect();

        group.bench_function(BenchmarkId::new("RBTree", N), |b| {
            b.iter_batched(
                || keys.iter().copied().collect::<RBTree<i64>>(),
                |mut tree| {
                    for key in &keys {
                        tree.delete(key);
                    }
                    tree
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter_batched(
                || set.clone(),
                |mut set| {
                    for key in &keys {
                        set.remove(key);
                    }
                    set
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.finish();
    }
}

fn bench_for_each(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: RBTree<i64> = keys.iter().copied().collect();
    let set: BTreeSet<i64> = keys.iter().copied().collect();
    let mut group = c.benchmark_group("traverse");

    group.bench_function(BenchmarkId::new("RBTree", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            tree.for_each(|&key| {
                sum = sum.wrapping_add(key);
                true
            });
            sum
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| set.iter().fold(0i64, |sum, &key| sum.wrapping_add(key)));
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains, bench_delete, bench_for_each);

criterion_main!(benches);
