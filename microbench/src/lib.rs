#![warn(missing_docs)]
//! # Microbench
//!
//! Minimal micro-benchmarking helper: run a unit of work a fixed number of
//! times, time each run, and report the fastest, slowest and mean duration.
//!
//! - **Warmup**: 5 untimed calls before measuring (can be turned off)
//! - **Setup / cleanup**: optional, run once, never timed
//! - **Two modes**: `run_blocking()` for plain closures, `run().await` for async work
//! - **Progress**: leveled notifications through a pluggable sink (`tracing` by default)
//! - **Fail fast**: the first error from any step is returned unchanged
//!
//! ## Quick Start
//!
//! ```no_run
//! use microbench::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     microbench::init_logging(false);
//!
//!     let mut runner = Runner::blocking("sum", || {
//!         std::hint::black_box((0..1_000u64).sum::<u64>());
//!         Ok(())
//!     })
//!     .count(50)
//!     .build()?;
//!
//!     let results = runner.run_blocking()?;
//!     println!("{results}");
//!     Ok(())
//! }
//! ```
//!
//! ## Async Work
//!
//! ```ignore
//! let mut runner = Runner::suspending("sleep", || async {
//!     tokio::time::sleep(Duration::from_millis(1)).await;
//!     Ok(())
//! })
//! .build()?;
//! let results = runner.run().await?;
//! ```

// Re-export core types
pub use microbench_core::{
    AsyncWork, BenchError, BenchmarkConfig, BlockingWork, CONFIG_FILE_NAME, DEFAULT_COUNT,
    FileConfig, NullSink, ProgressLevel, ProgressSink, RecordingSink, Runner, RunnerBuilder,
    RunnerDefaults, Timer, TracingSink, WARMUP_ITERATIONS, WorkItem,
};

// Re-export stats
pub use microbench_stats::{
    ResultSet, StatsError, Summary, format_duration, format_micros, generate_json_summary,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ProgressLevel, ProgressSink, ResultSet, Runner};
}

/// Install a `tracing` subscriber that prints progress notifications.
///
/// `verbose` raises the default filter from `info` to `debug` (phase
/// boundaries). The `microbench` target prefix also covers `microbench_core`.
/// `RUST_LOG` overrides both. Does nothing if a global subscriber is already set.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "microbench=debug"
    } else {
        "microbench=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
