//! Word list input
//!
//! Line-oriented loading of word files; the grouping core consumes the
//! resulting ordered sequence of words.

pub mod loader;

pub use loader::load_lines;
