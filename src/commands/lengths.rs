//! Word-length histogram command
//!
//! Frequency of line lengths in a word file, as percentages of the total.

/// Percentage of words at each character length
///
/// One row per length from 0 up to the longest word, including lengths no
/// word has (0.00%), so the histogram axis is contiguous. Returns an empty
/// vector for an empty word list.
#[must_use]
pub fn length_distribution(words: &[String]) -> Vec<(usize, f64)> {
    let Some(max_length) = words.iter().map(String::len).max() else {
        return Vec::new();
    };

    let mut counts = vec![0usize; max_length + 1];
    for word in words {
        counts[word.len()] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(length, &count)| (length, (count as f64 * 100.0) / words.len() as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn percentages_cover_every_length_up_to_max() {
        let rows = length_distribution(&words(&["a", "bb", "cc", "dddd"]));

        assert_eq!(rows.len(), 5); // Lengths 0 through 4
        assert_eq!(rows[0], (0, 0.0));
        assert_eq!(rows[1], (1, 25.0));
        assert_eq!(rows[2], (2, 50.0));
        assert_eq!(rows[3], (3, 0.0));
        assert_eq!(rows[4], (4, 25.0));
    }

    #[test]
    fn empty_lines_count_as_length_zero() {
        let rows = length_distribution(&words(&["", "ab"]));
        assert_eq!(rows[0], (0, 50.0));
        assert_eq!(rows[2], (2, 50.0));
    }

    #[test]
    fn empty_list_has_no_rows() {
        assert!(length_distribution(&[]).is_empty());
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let rows = length_distribution(&words(&["one", "two", "three", "four"]));
        let total: f64 = rows.iter().map(|r| r.1).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
}
