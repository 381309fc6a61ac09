//! Result Set
//!
//! Immutable, ascending-sorted collection of per-run durations in microseconds.
//! Minimum, maximum and mean are derived from the sorted slice on every call;
//! nothing is cached alongside it.

use crate::StatsError;
use crate::formatting::format_micros;
use crate::summary::Summary;
use std::fmt;

/// Sorted measurements from one completed benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    // Invariant: non-empty and sorted ascending.
    measurements: Box<[u64]>,
}

impl ResultSet {
    /// Build a result set from raw microsecond measurements.
    ///
    /// The input order does not matter; the stored copy is sorted ascending.
    ///
    /// # Errors
    /// Returns [`StatsError::EmptyResultSet`] when `measurements` is empty.
    pub fn new(mut measurements: Vec<u64>) -> Result<Self, StatsError> {
        if measurements.is_empty() {
            return Err(StatsError::EmptyResultSet);
        }
        measurements.sort_unstable();

        Ok(Self {
            measurements: measurements.into_boxed_slice(),
        })
    }

    /// Fastest run (first sorted element).
    pub fn bottom(&self) -> u64 {
        self.measurements[0]
    }

    /// Slowest run (last sorted element).
    pub fn peak(&self) -> u64 {
        self.measurements[self.measurements.len() - 1]
    }

    /// Arithmetic mean in microseconds, recomputed from the measurements.
    pub fn average(&self) -> f64 {
        self.total() as f64 / self.measurements.len() as f64
    }

    /// Sum of all measurements in microseconds.
    pub fn total(&self) -> u128 {
        self.measurements.iter().map(|&m| u128::from(m)).sum()
    }

    /// Sorted measurements, read-only.
    pub fn measurements(&self) -> &[u64] {
        &self.measurements
    }

    /// Number of timed runs.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Result sets are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// One-line summary: peak, bottom, then average rounded to the nearest microsecond.
    pub fn render(&self) -> String {
        format!(
            "peak: {}, bottom: {}, average: {}",
            format_micros(self.peak()),
            format_micros(self.bottom()),
            format_micros(self.average().round() as u64),
        )
    }

    /// Serializable snapshot of the derived statistics.
    pub fn summary(&self, name: impl Into<String>) -> Summary {
        Summary {
            name: name.into(),
            count: self.len(),
            bottom_us: self.bottom(),
            peak_us: self.peak(),
            average_us: self.average(),
        }
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl TryFrom<Vec<u64>> for ResultSet {
    type Error = StatsError;

    fn try_from(measurements: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(measurements)
    }
}
