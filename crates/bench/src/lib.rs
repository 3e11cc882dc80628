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

/// `len` values drawn uniformly from `0..=max`.
pub fn random_bounded<R: Rng + ?Sized>(rng: &mut R, len: usize, max: u64) -> Vec<u64> {
    (0..len).map(|_| rng.random_range(0..=max)).collect()
}

pub fn ascending(len: usize) -> Vec<u64> {
    (0..len as u64).collect()
}

pub fn descending(len: usize) -> Vec<u64> {
    (0..len as u64).rev().collect()
}

/// Random values in `0..=len / 2`, split into `runs` chunks that are each sorted
/// ascending.
pub fn presorted_runs<R: Rng + ?Sized>(rng: &mut R, len: usize, runs: usize) -> Vec<u64> {
    let mut data = random_bounded(rng, len, (len / 2) as u64);
    if len == 0 {
        return data;
    }

    let chunk = len.div_ceil(runs.max(1));
    for run in data.chunks_mut(chunk) {
        run.sort_unstable();
    }
    data
}

/// `runs` interleaved chunks alternating between ascending and descending.
///
/// Chunk `k` holds `j * runs + k` for each offset `j`, so neighbouring chunks
/// overlap in value range and never join into one sorted run.
pub fn sawtooth(len: usize, runs: usize) -> Vec<u64> {
    let runs = runs.max(1);
    let chunk = len.div_ceil(runs).max(1);

    let mut data = Vec::with_capacity(len);
    for k in 0..runs {
        let start = k * chunk;
        if start >= len {
            break;
        }
        let count = chunk.min(len - start);
        let values = (0..count).map(|j| (j * runs + k) as u64);
        if k % 2 == 0 {
            data.extend(values);
        } else {
            data.extend(values.rev());
        }
    }
    data
}
