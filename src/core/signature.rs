//! Anagram signatures
//!
//! A Signature is the canonical key identifying all anagrams of a word: its
//! alphabetic characters, case-folded, in ascending order.

use std::fmt;

/// Canonical anagram key for a word
///
/// Two words are anagrams of each other exactly when their signatures are
/// equal. Ordering is by length first, then lexicographic, which is the
/// total order the registry keeps its groups in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    text: String,
}

impl Signature {
    /// Compute the signature of a word
    ///
    /// Case-folds to lowercase, discards every character outside `a`-`z`,
    /// and emits each remaining letter in ascending order repeated by its
    /// count. A word with no alphabetic characters yields the empty
    /// signature; such words all group together.
    ///
    /// # Examples
    /// ```
    /// use anagram_toolkit::core::Signature;
    ///
    /// assert_eq!(Signature::normalize("Tea2!").as_str(), "aet");
    /// assert_eq!(Signature::normalize("ate").as_str(), "aet");
    /// assert_eq!(Signature::normalize("1234").as_str(), "");
    /// ```
    #[must_use]
    pub fn normalize(word: &str) -> Self {
        let mut counts = [0usize; 26];
        let mut len = 0;

        for c in word.chars() {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() {
                counts[(c as u8 - b'a') as usize] += 1;
                len += 1;
            }
        }

        let mut text = String::with_capacity(len);
        for (i, &count) in counts.iter().enumerate() {
            for _ in 0..count {
                text.push((b'a' + i as u8) as char);
            }
        }

        Self { text }
    }

    /// Get the signature as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of letters in the signature
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the signature is empty (source word had no letters)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Ord for Signature {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.text
            .len()
            .cmp(&other.text.len())
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Signature {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_sorts_letters() {
        assert_eq!(Signature::normalize("tea").as_str(), "aet");
        assert_eq!(Signature::normalize("eat").as_str(), "aet");
        assert_eq!(Signature::normalize("ate").as_str(), "aet");
    }

    #[test]
    fn normalize_case_folds() {
        assert_eq!(
            Signature::normalize("Listen"),
            Signature::normalize("SILENT")
        );
    }

    #[test]
    fn normalize_discards_non_letters() {
        assert_eq!(Signature::normalize("Tea2!").as_str(), "aet");
        assert_eq!(Signature::normalize("t-e.a").as_str(), "aet");
    }

    #[test]
    fn normalize_keeps_duplicate_letters() {
        assert_eq!(Signature::normalize("speed").as_str(), "deeps");
        assert_eq!(Signature::normalize("deeps").as_str(), "deeps");
    }

    #[test]
    fn normalize_no_letters_is_empty() {
        assert!(Signature::normalize("").is_empty());
        assert!(Signature::normalize("1234").is_empty());
        assert!(Signature::normalize("!!!").is_empty());
        assert_eq!(Signature::normalize("1234"), Signature::normalize("!!!"));
    }

    #[test]
    fn normalize_ignores_non_ascii() {
        // Only a-z survive the fold
        assert_eq!(Signature::normalize("café").as_str(), "acf");
    }

    #[test]
    fn equal_iff_letter_permutation() {
        assert_eq!(Signature::normalize("dusty"), Signature::normalize("study"));
        assert_ne!(Signature::normalize("dusty"), Signature::normalize("dust"));
        assert_ne!(Signature::normalize("abc"), Signature::normalize("abd"));
    }

    #[test]
    fn order_is_length_then_lexicographic() {
        let short = Signature::normalize("zz");
        let long = Signature::normalize("aaa");
        assert!(short < long); // Length dominates

        let abc = Signature::normalize("cab");
        let abd = Signature::normalize("dab");
        assert!(abc < abd); // Same length, lexicographic
    }

    #[test]
    fn empty_signature_sorts_first() {
        assert!(Signature::normalize("!") < Signature::normalize("a"));
    }

    #[test]
    fn display_matches_as_str() {
        let sig = Signature::normalize("tea");
        assert_eq!(format!("{sig}"), "aet");
    }
}
