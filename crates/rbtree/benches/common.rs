use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{
    KeyPattern, apply_medium_runtime_config, apply_small_runtime_config, default_rng, generate_keys,
};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};
use rand::Rng;
use rand::rngs::StdRng;

use rbtree::{OrderedSet, RedBlackTree, StdBTreeSet};

const SIZES: [usize; 4] = [1_000, 8_000, 64_000, 256_000];
const LARGE_BUILD_SIZE: usize = 64_000;
const LOOKUPS_PER_ITER: usize = 1_000;
const LOOKUP_HIT_RATE_PERCENT: u32 = 50;

/// Builds a fresh set from `pattern` keys on every iteration.
pub fn bench_build<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str, pattern: KeyPattern)
where
    T: Measurement<Value = Duration>,
    S: OrderedSet<Key = i64>,
{
    let mut rng = default_rng();
    for &size in &SIZES {
        if size >= LARGE_BUILD_SIZE {
            apply_medium_runtime_config(group);
        } else {
            apply_small_runtime_config(group);
        }
        let keys = generate_keys(pattern, size, &mut rng);
        let id = format!("{label}/{}", pattern.name());
        group.bench_function(BenchmarkId::new(id, size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let start = Instant::now();
                    let mut set = S::new();
                    for &k in &keys {
                        black_box(set.insert(k));
                    }
                    black_box(set.len());
                    total += start.elapsed();
                }
                total
            })
        });
    }
}

/// Membership queries against a set built from shuffled keys.
pub fn bench_contains<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement<Value = Duration>,
    S: OrderedSet<Key = i64>,
{
    let mut rng = default_rng();
    for &size in &SIZES {
        apply_small_runtime_config(group);
        let keys = generate_keys(KeyPattern::Shuffled, size, &mut rng);
        let mut set = S::new();
        for &k in &keys {
            set.insert(k);
        }
        let queries = generate_queries(&keys, &mut rng);

        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                for q in &queries {
                    black_box(set.contains(q));
                }
            })
        });
    }
}

fn generate_queries(keys: &[i64], rng: &mut StdRng) -> Vec<i64> {
    (0..LOOKUPS_PER_ITER)
        .map(|_| {
            if rng.random_range(0..100) < LOOKUP_HIT_RATE_PERCENT {
                keys[rng.random_range(0..keys.len())]
            } else {
                // Shuffled keys are 0..size, so negatives always miss.
                -rng.random_range(1..=i64::MAX)
            }
        })
        .collect()
}

pub fn bench_all_build<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    for pattern in KeyPattern::ALL {
        bench_build::<StdBTreeSet<i64>, _>(group, "std_btree", pattern);
        bench_build::<RedBlackTree<i64>, _>(group, "top_down_rb", pattern);
    }
}

pub fn bench_all_contains<T>(group: &mut BenchmarkGroup<'_, T>)
where
    T: Measurement<Value = Duration>,
{
    bench_contains::<StdBTreeSet<i64>, _>(group, "std_btree");
    bench_contains::<RedBlackTree<i64>, _>(group, "top_down_rb");
}
