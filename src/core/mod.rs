//! Core domain types
//!
//! The signature normalizer, anagram groups, and the ordered group registry.
//! All types here are pure, testable, and have clear mathematical properties.

mod group;
mod registry;
mod signature;

pub use group::Group;
pub use registry::{Registry, RegistryError};
pub use signature::Signature;
