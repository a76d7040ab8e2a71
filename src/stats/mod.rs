//! Read-only statistics over a registry
//!
//! Scans that never mutate: largest group size, longest anagram pair, and
//! the group-size distribution for histogram rendering.

pub mod distribution;

pub use distribution::size_distribution;

use crate::core::Registry;

/// Size of the largest anagram group
///
/// Returns `None` on an empty registry rather than a sentinel value.
#[must_use]
pub fn largest_group_size(registry: &Registry) -> Option<usize> {
    registry.iter().map(crate::core::Group::size).max()
}

/// The longest anagram pair: two words from the group with the longest members
///
/// Only groups with at least two members qualify. Length is read from a
/// group's first member, since all anagrams in a group share one letter
/// count. When several groups tie for the maximum length the first group in
/// registry order wins; because members are appended to the back, the pair
/// returned is the group's two first-inserted words.
///
/// Returns `None` when no group has two or more members.
#[must_use]
pub fn longest_pair(registry: &Registry) -> Option<(&str, &str)> {
    let mut best: Option<(&str, &str)> = None;
    let mut max_length = 0;

    for group in registry {
        let members = group.members();
        if members.len() >= 2 && members[0].len() > max_length {
            max_length = members[0].len();
            best = Some((&members[0], &members[1]));
        }
    }

    best
}
