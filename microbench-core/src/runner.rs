//! Runner - The Benchmark Execution Protocol
//!
//! One sequential protocol drives every benchmark:
//! setup → warmup → `count` timed runs → cleanup → `ResultSet`.
//!
//! [`Runner::run`] is the suspend-capable entry point and works for any
//! [`WorkItem`]. [`Runner::run_blocking`] exists only on `Runner<BlockingWork>`
//! and drives that same future to completion on the calling thread.
//!
//! Errors from setup, execute or cleanup are returned as-is and abort the
//! remaining steps. Cleanup is not run after a failure.

use crate::BenchError;
use crate::config::{BenchmarkConfig, DEFAULT_COUNT, RunnerDefaults, WARMUP_ITERATIONS};
use crate::measure::Timer;
use crate::progress::{ProgressLevel, ProgressSink, TracingSink};
use crate::work::{AsyncWork, BlockingWork, WorkItem};
use microbench_stats::ResultSet;
use std::sync::Arc;

/// A configured benchmark, ready to run.
pub struct Runner<W> {
    config: BenchmarkConfig,
    execute: W,
    setup: Option<W>,
    cleanup: Option<W>,
    sink: Arc<dyn ProgressSink>,
}

/// Collects the pieces of a [`Runner`]; validation happens in [`build`](Self::build).
pub struct RunnerBuilder<W> {
    name: String,
    execute: W,
    setup: Option<W>,
    cleanup: Option<W>,
    count: usize,
    warmup: bool,
    sink: Arc<dyn ProgressSink>,
}

impl Runner<BlockingWork> {
    /// Start building a runner whose work never suspends.
    pub fn blocking<F>(name: impl Into<String>, execute: F) -> RunnerBuilder<BlockingWork>
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        RunnerBuilder::new(name, BlockingWork::new(execute))
    }

    /// Run the protocol on the current thread and return the results.
    pub fn run_blocking(&mut self) -> anyhow::Result<ResultSet> {
        // Blocking work items are ready on first poll, so this never parks.
        futures::executor::block_on(self.run())
    }
}

impl Runner<AsyncWork> {
    /// Start building a runner whose work may suspend.
    pub fn suspending<F, Fut>(name: impl Into<String>, execute: F) -> RunnerBuilder<AsyncWork>
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        RunnerBuilder::new(name, AsyncWork::new(execute))
    }
}

impl<W: WorkItem> Runner<W> {
    /// Start building a runner around any [`WorkItem`] implementation.
    pub fn builder(name: impl Into<String>, execute: W) -> RunnerBuilder<W> {
        RunnerBuilder::new(name, execute)
    }

    /// Validated configuration
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Benchmark name
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Run setup, warmup, the timed loop and cleanup, in that order.
    ///
    /// Each step is awaited before the next begins; iterations never overlap.
    pub async fn run(&mut self) -> anyhow::Result<ResultSet> {
        let count = self.config.count();

        self.emit(
            ProgressLevel::Info,
            &format!(
                "Starting benchmark: {count} runs, warmup {}",
                if self.config.warmup() { "on" } else { "off" }
            ),
        );

        if self.setup.is_some() {
            self.emit(ProgressLevel::Fine, "Running setup");
        }
        if let Some(setup) = self.setup.as_mut() {
            setup.invoke().await?;
        }

        if self.config.warmup() {
            self.emit(
                ProgressLevel::Fine,
                &format!("Warming up ({WARMUP_ITERATIONS} runs)"),
            );
            for _ in 0..WARMUP_ITERATIONS {
                self.execute.invoke().await?;
            }
        }

        self.emit(ProgressLevel::Fine, "Running timed loop");
        let mut measurements = Vec::with_capacity(count);
        for i in 0..count {
            self.emit(ProgressLevel::Debug, &format!("Run {}/{count}", i + 1));

            let timer = Timer::start();
            self.execute.invoke().await?;
            measurements.push(timer.stop_micros());
        }

        if self.cleanup.is_some() {
            self.emit(ProgressLevel::Fine, "Running cleanup");
        }
        if let Some(cleanup) = self.cleanup.as_mut() {
            cleanup.invoke().await?;
        }

        let results = ResultSet::new(measurements)?;

        self.emit(ProgressLevel::Fine, "Done");
        self.emit(ProgressLevel::Info, &results.render());

        Ok(results)
    }

    fn emit(&self, level: ProgressLevel, message: &str) {
        self.sink.emit(level, self.config.name(), message);
    }
}

impl<W: WorkItem> RunnerBuilder<W> {
    fn new(name: impl Into<String>, execute: W) -> Self {
        Self {
            name: name.into(),
            execute,
            setup: None,
            cleanup: None,
            count: DEFAULT_COUNT,
            warmup: true,
            sink: Arc::new(TracingSink),
        }
    }

    /// Number of timed iterations (default 100, must be > 0)
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Whether to run the warmup iterations first (default `true`)
    pub fn warmup(mut self, warmup: bool) -> Self {
        self.warmup = warmup;
        self
    }

    /// Apply file-configured defaults. Later `count`/`warmup` calls still win.
    pub fn defaults(mut self, defaults: &RunnerDefaults) -> Self {
        self.count = defaults.count;
        self.warmup = defaults.warmup;
        self
    }

    /// Where progress notifications go (default [`TracingSink`])
    pub fn sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Untimed work run once before warmup
    pub fn setup_item(mut self, setup: W) -> Self {
        self.setup = Some(setup);
        self
    }

    /// Untimed work run once after the timed loop
    pub fn cleanup_item(mut self, cleanup: W) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Validate the configuration and produce the runner.
    ///
    /// # Errors
    /// [`BenchError::InvalidConfiguration`] when `count` is zero. No work item
    /// has been invoked at that point.
    pub fn build(self) -> Result<Runner<W>, BenchError> {
        let config = BenchmarkConfig::new(self.name, self.count, self.warmup)?;
        Ok(Runner {
            config,
            execute: self.execute,
            setup: self.setup,
            cleanup: self.cleanup,
            sink: self.sink,
        })
    }
}

impl RunnerBuilder<BlockingWork> {
    /// Untimed closure run once before warmup
    pub fn setup<F>(self, f: F) -> Self
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        self.setup_item(BlockingWork::new(f))
    }

    /// Untimed closure run once after the timed loop
    pub fn cleanup<F>(self, f: F) -> Self
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        self.cleanup_item(BlockingWork::new(f))
    }
}

impl RunnerBuilder<AsyncWork> {
    /// Untimed async closure run once before warmup
    pub fn setup<F, Fut>(self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.setup_item(AsyncWork::new(f))
    }

    /// Untimed async closure run once after the timed loop
    pub fn cleanup<F, Fut>(self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.cleanup_item(AsyncWork::new(f))
    }
}
