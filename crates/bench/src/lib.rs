//! Shared criterion settings and seeded input generators for the benches.

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;

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

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(VALUE_RANGE)).collect()
}

/// Sequence whose neighbours differ by exactly one.
pub fn random_walk<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    let mut cur = 0_i64;
    for _ in 0..n {
        values.push(cur);
        cur += if rng.random_bool(0.5) { 1 } else { -1 };
    }
    values
}

/// Parent array of a random recursive tree rooted at `0`.
pub fn random_parents<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Option<usize>> {
    (0..n)
        .map(|i| (i > 0).then(|| rng.random_range(0..i)))
        .collect()
}

/// Parent array of a tree whose nodes mostly hang off one long spine.
pub fn caterpillar_parents<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Option<usize>> {
    let spine = (n / 2).max(1);
    (0..n)
        .map(|i| match i {
            0 => None,
            i if i < spine => Some(i - 1),
            _ => Some(rng.random_range(0..spine)),
        })
        .collect()
}
