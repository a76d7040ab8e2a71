//! Group registry
//!
//! The ordered collection of anagram groups. Groups are kept sorted by
//! (signature length, signature) at all times, with one group per signature.

use super::{Group, Signature};
use std::collections::TryReserveError;
use std::fmt;

/// Error type for registry mutations
///
/// The only failure an insertion can hit is running out of memory, which is
/// surfaced to the caller instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    ResourceExhausted(TryReserveError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceExhausted(e) => write!(f, "Out of memory while inserting word: {e}"),
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<TryReserveError> for RegistryError {
    fn from(e: TryReserveError) -> Self {
        Self::ResourceExhausted(e)
    }
}

/// Ordered collection of anagram groups
///
/// Invariants, held after every insertion:
/// - groups are sorted ascending by (signature length, signature)
/// - no two groups share a signature
/// - every ingested word belongs to exactly one group, the one keyed by
///   `Signature::normalize(word)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    groups: Vec<Group>,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from words, ingesting them in input order
    ///
    /// An empty word sequence is valid and produces an empty, queryable
    /// registry.
    ///
    /// # Errors
    /// Returns `RegistryError::ResourceExhausted` if memory runs out.
    pub fn build<I>(words: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut registry = Self::new();
        for word in words {
            registry.insert(word)?;
        }
        Ok(registry)
    }

    /// Insert one word into its anagram group
    ///
    /// Computes the word's signature, finds the first group whose
    /// (length, signature) tuple is not less than it, and either appends the
    /// word to that group (signatures equal) or splices a new single-member
    /// group in at that position. New members go to the back of a group's
    /// member list, so a group's first member is always its first-inserted
    /// word.
    ///
    /// # Errors
    /// Returns `RegistryError::ResourceExhausted` if memory runs out; the
    /// registry is unchanged in that case.
    pub fn insert(&mut self, word: impl Into<String>) -> Result<(), RegistryError> {
        let word = word.into();
        let key = Signature::normalize(&word);

        match self.groups.binary_search_by(|g| g.signature().cmp(&key)) {
            Ok(index) => {
                self.groups[index].push(word)?;
            }
            Err(index) => {
                self.groups.try_reserve(1)?;
                self.groups.insert(index, Group::new(key, word));
            }
        }
        Ok(())
    }

    /// Look up the group for a signature
    ///
    /// Unknown signatures are a defined not-found result, never an error.
    #[must_use]
    pub fn find_group(&self, key: &Signature) -> Option<&Group> {
        self.groups
            .binary_search_by(|g| g.signature().cmp(key))
            .ok()
            .map(|index| &self.groups[index])
    }

    /// All groups, sorted by (signature length, signature)
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Iterate groups in registry order
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Number of distinct groups
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the registry holds no groups
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
