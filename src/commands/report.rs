//! Batch reporting command
//!
//! Ingests a word list, builds the registry, and gathers aggregate
//! statistics with phase timings.

use crate::core::{Registry, RegistryError};
use crate::stats::{largest_group_size, longest_pair, size_distribution};
use std::time::{Duration, Instant};

/// Aggregate statistics over one word file
pub struct ReportResult {
    pub total_words: usize,
    pub group_count: usize,
    pub largest_group: Option<usize>,
    pub longest_pair: Option<(String, String)>,
    pub distribution: Vec<(usize, f64)>,
    pub build_duration: Duration,
    pub words_per_second: f64,
}

/// Build the registry from `words` and extract every report statistic
///
/// Timings are measured here and carried in the result so the caller decides
/// how (or whether) to show them; the core itself keeps no counters.
///
/// # Errors
/// Returns `RegistryError::ResourceExhausted` if memory runs out while
/// grouping.
pub fn run_report(words: Vec<String>) -> Result<ReportResult, RegistryError> {
    let total_words = words.len();

    let build_start = Instant::now();
    let registry = Registry::build(words)?;
    let build_duration = build_start.elapsed();

    let words_per_second = if build_duration.as_secs_f64() > 0.0 {
        total_words as f64 / build_duration.as_secs_f64()
    } else {
        0.0
    };

    Ok(ReportResult {
        total_words,
        group_count: registry.len(),
        largest_group: largest_group_size(&registry),
        longest_pair: longest_pair(&registry).map(|(a, b)| (a.to_string(), b.to_string())),
        distribution: size_distribution(&registry),
        build_duration,
        words_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_of(words: &[&str]) -> ReportResult {
        run_report(words.iter().map(|&w| w.to_string()).collect()).unwrap()
    }

    #[test]
    fn report_gathers_all_statistics() {
        let result = report_of(&["eat", "tea", "ate", "bin", "nib", "lonely"]);

        assert_eq!(result.total_words, 6);
        assert_eq!(result.group_count, 3);
        assert_eq!(result.largest_group, Some(3));
        assert_eq!(
            result.longest_pair,
            Some(("eat".to_string(), "tea".to_string()))
        );
        assert_eq!(result.distribution, vec![(2, 0.0), (3, 0.0)]);
    }

    #[test]
    fn report_on_empty_input() {
        let result = report_of(&[]);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.group_count, 0);
        assert_eq!(result.largest_group, None);
        assert_eq!(result.longest_pair, None);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn longest_pair_prefers_longer_words() {
        let result = report_of(&["eat", "tea", "listen", "silent"]);
        assert_eq!(
            result.longest_pair,
            Some(("listen".to_string(), "silent".to_string()))
        );
    }
}
