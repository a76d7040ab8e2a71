//! Terminal output formatting

pub mod display;
pub mod histogram;

pub use display::{print_length_histogram, print_report, print_simulation};
