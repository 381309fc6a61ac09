#![warn(missing_docs)]
//! Microbench Statistics
//!
//! Holds the outcome of a benchmark run:
//! - `ResultSet`: immutable, sorted per-run durations (microseconds)
//! - Derived minimum (`bottom`), maximum (`peak`) and exact mean (`average`)
//! - `H:MM:SS.ffffff` duration rendering
//! - Serializable `Summary` snapshot with JSON output

mod formatting;
mod result_set;
mod summary;

pub use formatting::{format_duration, format_micros};
pub use result_set::ResultSet;
pub use summary::{Summary, generate_json_summary};

/// Errors raised while building statistics
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// A result set needs at least one measurement
    #[error("cannot build a result set from zero measurements")]
    EmptyResultSet,
}
