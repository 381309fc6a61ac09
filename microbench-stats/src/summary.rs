//! Summary Snapshot
//!
//! Machine-readable form of a [`ResultSet`](crate::ResultSet)'s derived
//! statistics, for callers that want to persist or ship results.

use serde::{Deserialize, Serialize};

/// Derived statistics of one benchmark run, in microseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Benchmark name
    pub name: String,
    /// Number of timed runs
    pub count: usize,
    /// Fastest run
    pub bottom_us: u64,
    /// Slowest run
    pub peak_us: u64,
    /// Exact arithmetic mean
    pub average_us: f64,
}

/// Generate prettified JSON for a summary.
pub fn generate_json_summary(summary: &Summary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
