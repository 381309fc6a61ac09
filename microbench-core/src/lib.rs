#![warn(missing_docs)]
//! Microbench Core - Timing Engine
//!
//! This crate provides the execution side of microbench:
//! - `Runner`: setup → warmup → timed loop → cleanup, blocking or async
//! - `WorkItem` with blocking (`BlockingWork`) and suspending (`AsyncWork`) flavours
//! - `Timer` built on the monotonic clock, microsecond resolution
//! - `ProgressSink` for leveled progress messages (`TracingSink` by default)
//! - `microbench.toml` configuration discovery

mod config;
mod measure;
mod progress;
mod runner;
mod work;

pub use config::{
    BenchmarkConfig, CONFIG_FILE_NAME, DEFAULT_COUNT, FileConfig, RunnerDefaults,
    WARMUP_ITERATIONS,
};
pub use measure::Timer;
pub use progress::{NullSink, ProgressLevel, ProgressSink, RecordingSink, TracingSink};
pub use runner::{Runner, RunnerBuilder};
pub use work::{AsyncWork, BlockingWork, WorkItem};

/// Errors raised while configuring a benchmark
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The iteration count must be strictly positive
    #[error("benchmark '{name}': count must be greater than zero (got {count})")]
    InvalidConfiguration {
        /// Benchmark name
        name: String,
        /// Rejected count
        count: usize,
    },
}
