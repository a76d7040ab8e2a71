//! Command implementations

pub mod lengths;
pub mod patience;
pub mod query;
pub mod report;

pub use lengths::length_distribution;
pub use patience::{run_simulation, run_single_game};
pub use query::{anagrams_of, run_query};
pub use report::{ReportResult, run_report};
