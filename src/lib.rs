//! Anagram Toolkit
//!
//! Groups the words of a text file into anagram classes and answers
//! statistics and lookup queries over the grouping. Ships with a word-length
//! histogram, an interactive lookup mode, and a patience card-game simulator.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_toolkit::core::{Registry, Signature};
//!
//! let registry = Registry::build(["eat", "tea", "ate", "bin"]).unwrap();
//!
//! let group = registry.find_group(&Signature::normalize("tea")).unwrap();
//! assert_eq!(group.members(), &["eat", "tea", "ate"]);
//! ```

// Core domain types
pub mod core;

// Registry statistics
pub mod stats;

// Word list input
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Patience card-game simulator
pub mod patience;
