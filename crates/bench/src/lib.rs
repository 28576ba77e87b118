use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Insertion order of a key workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    Ascending,
    Descending,
    /// `0, n-1, 1, n-2, ...`: every insert lands next to the previous extreme.
    ZigZag,
    Shuffled,
    /// Uniform over the full `i64` range, duplicates possible.
    Uniform,
}

impl KeyPattern {
    pub const ALL: [KeyPattern; 5] = [
        KeyPattern::Ascending,
        KeyPattern::Descending,
        KeyPattern::ZigZag,
        KeyPattern::Shuffled,
        KeyPattern::Uniform,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeyPattern::Ascending => "ascending",
            KeyPattern::Descending => "descending",
            KeyPattern::ZigZag => "zigzag",
            KeyPattern::Shuffled => "shuffled",
            KeyPattern::Uniform => "uniform",
        }
    }
}

pub fn generate_keys<R: Rng + ?Sized>(pattern: KeyPattern, n: usize, rng: &mut R) -> Vec<i64> {
    let n_i64 = n as i64;
    match pattern {
        KeyPattern::Ascending => (0..n_i64).collect(),
        KeyPattern::Descending => (0..n_i64).rev().collect(),
        KeyPattern::ZigZag => (0..n_i64)
            .map(|i| if i % 2 == 0 { i / 2 } else { n_i64 - 1 - i / 2 })
            .collect(),
        KeyPattern::Shuffled => {
            let mut keys: Vec<i64> = (0..n_i64).collect();
            keys.shuffle(rng);
            keys
        }
        KeyPattern::Uniform => (0..n).map(|_| rng.random()).collect(),
    }
}
