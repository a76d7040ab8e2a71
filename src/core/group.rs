//! Anagram groups
//!
//! A Group owns every ingested word sharing one signature, in the order the
//! words were inserted.

use super::Signature;
use std::collections::TryReserveError;
use std::fmt;

/// One anagram group: a signature and its member words
///
/// Members keep their original casing and characters exactly as ingested.
/// The registry is the only writer; a group is created with its first member
/// and only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    signature: Signature,
    members: Vec<String>,
}

impl Group {
    /// Create a group holding a single word
    pub(crate) fn new(signature: Signature, word: String) -> Self {
        Self {
            signature,
            members: vec![word],
        }
    }

    /// Append a word; members stay in insertion order
    ///
    /// Reserves explicitly so an out-of-memory condition is reported rather
    /// than aborting the process.
    pub(crate) fn push(&mut self, word: String) -> Result<(), TryReserveError> {
        self.members.try_reserve(1)?;
        self.members.push(word);
        Ok(())
    }

    /// The signature shared by every member
    #[inline]
    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Member words in insertion order
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Number of member words
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] → {}", self.signature, self.members.join(" "))
    }
}
