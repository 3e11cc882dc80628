//! Stable heap selection sort.
//!
//! The input range is split into maximal monotonic runs in one pass, with
//! descending runs reversed in place. A binary min-heap over those runs then
//! repeatedly yields the smallest remaining head element. Presorted input costs
//! `n - 1` comparisons; the worst case is a k-way merge of `n / 2` runs.

mod engine;
mod run_builder;
mod run_heap;

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::ops::Range;

/// Whether a run may be folded into the preceding reversed descending run
/// instead of taking its own heap slot. Output is identical either way.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RunStitching {
    Enabled,
    Disabled,
}

pub const ALL_RUN_STITCHING: [RunStitching; 2] = [RunStitching::Enabled, RunStitching::Disabled];

pub fn run_stitching_name(mode: RunStitching) -> &'static str {
    match mode {
        RunStitching::Enabled => "stitched",
        RunStitching::Disabled => "unstitched",
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortConfig {
    pub run_stitching: RunStitching,
}

pub const DEFAULT_CONFIG: SortConfig = SortConfig {
    run_stitching: RunStitching::Enabled,
};

impl Default for SortConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

/// Invalid sub-range passed to one of the `sort_range*` functions.
///
/// Reported before any element is moved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortError {
    /// The range ends past the end of the slice.
    EndOutOfBounds { end: usize, len: usize },
    /// The range starts after it ends.
    StartAfterEnd { start: usize, end: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EndOutOfBounds { end, len } => {
                write!(f, "range end index {end} out of range for slice of length {len}")
            }
            Self::StartAfterEnd { start, end } => {
                write!(f, "range start index {start} is greater than end index {end}")
            }
        }
    }
}

impl Error for SortError {}

/// Sorts the whole slice by the natural order of `T`. Stable.
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, T::cmp);
}

/// Sorts the whole slice with `compare`, which must be a total order. Stable.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    engine::sort(v, DEFAULT_CONFIG, &mut compare);
}

/// Sorts the whole slice by the key `f` extracts. Stable.
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(v, |a, b| f(a).cmp(&f(b)));
}

/// Sorts `v[range]` by the natural order of `T`, leaving the rest untouched.
pub fn sort_range<T: Ord>(v: &mut [T], range: Range<usize>) -> Result<(), SortError> {
    sort_range_by(v, range, T::cmp)
}

/// Sorts `v[range]` with `compare`, leaving the rest untouched.
pub fn sort_range_by<T, F>(v: &mut [T], range: Range<usize>, compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range_by_with_config(v, range, DEFAULT_CONFIG, compare)
}

/// Sorts `v[range]` with `compare` under an explicit configuration.
///
/// # Errors
///
/// Returns [`SortError::EndOutOfBounds`] if `range.end > v.len()` and
/// [`SortError::StartAfterEnd`] if `range.start > range.end`. The slice is not
/// modified in either case.
///
/// Ranges shorter than two elements return `Ok(())` without calling `compare`.
///
/// If `compare` panics, `v` still holds each of its original elements exactly
/// once, in unspecified order.
pub fn sort_range_by_with_config<T, F>(
    v: &mut [T],
    range: Range<usize>,
    config: SortConfig,
    mut compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Range { start, end } = range;
    if end > v.len() {
        return Err(SortError::EndOutOfBounds { end, len: v.len() });
    }
    if start > end {
        return Err(SortError::StartAfterEnd { start, end });
    }

    engine::sort(&mut v[start..end], config, &mut compare);
    Ok(())
}
