//! Group-size distribution
//!
//! Frequency data for the histogram renderer: how many groups have each size,
//! on a log10 scale.

use crate::core::Registry;
use rustc_hash::FxHashMap;

/// Frequency of anagram group sizes, for histogram rendering
///
/// Counts, for each group size of at least 2, how many groups have exactly
/// that size, and returns `(size, log10(count))` pairs sorted ascending by
/// size. Groups of size 1 are words without an anagram partner and are
/// excluded by design. A size that exactly one group has maps to
/// `log10(1) = 0.0`.
#[must_use]
pub fn size_distribution(registry: &Registry) -> Vec<(usize, f64)> {
    let mut freq: FxHashMap<usize, usize> = FxHashMap::default();
    for group in registry {
        if group.size() >= 2 {
            *freq.entry(group.size()).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<(usize, f64)> = freq
        .into_iter()
        .map(|(size, count)| (size, (count as f64).log10()))
        .collect();
    rows.sort_unstable_by_key(|&(size, _)| size);
    rows
}
