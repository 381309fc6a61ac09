//! Progress Notifications
//!
//! The runner reports what it is doing through a [`ProgressSink`] handed to it
//! at construction. Sinks only observe; nothing they do can change a result.

use std::sync::Mutex;

/// Severity of a progress notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProgressLevel {
    /// Per-iteration detail
    Debug,
    /// Phase boundaries: setup, warmup, loop start, cleanup, done
    Fine,
    /// Start of a run and its final summary
    Info,
}

/// Receiver for leveled progress messages.
pub trait ProgressSink: Send + Sync {
    /// Record one message. `bench` is the name of the emitting benchmark.
    fn emit(&self, level: ProgressLevel, bench: &str, message: &str);
}

/// Forwards notifications to `tracing`.
///
/// `Info` maps to `info!`, `Fine` to `debug!`, `Debug` to `trace!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn emit(&self, level: ProgressLevel, bench: &str, message: &str) {
        match level {
            ProgressLevel::Info => tracing::info!(bench = %bench, "{message}"),
            ProgressLevel::Fine => tracing::debug!(bench = %bench, "{message}"),
            ProgressLevel::Debug => tracing::trace!(bench = %bench, "{message}"),
        }
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&self, _level: ProgressLevel, _bench: &str, _message: &str) {}
}

/// Keeps every notification in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(ProgressLevel, String)>>,
}

impl RecordingSink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded `(level, message)` pairs
    pub fn events(&self) -> Vec<(ProgressLevel, String)> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Recorded messages at exactly `level`
    pub fn messages_at(&self, level: ProgressLevel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl ProgressSink for RecordingSink {
    fn emit(&self, level: ProgressLevel, _bench: &str, message: &str) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push((level, message.to_string()));
    }
}
