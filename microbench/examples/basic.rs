//! Basic usage: the same workload measured in blocking and async mode.
//!
//! Run with: cargo run --example basic -p microbench --release

use microbench::prelude::*;
use microbench::{FileConfig, generate_json_summary};
use std::hint::black_box;
use std::time::Duration;

fn fib(n: u64) -> u64 {
    if n < 2 { n } else { fib(n - 1) + fib(n - 2) }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    microbench::init_logging(true);

    // microbench.toml in this or a parent directory overrides count/warmup
    let config = FileConfig::discover().unwrap_or_default();

    let mut blocking = Runner::blocking("fib_20", || {
        black_box(fib(black_box(20)));
        Ok(())
    })
    .defaults(&config.runner)
    .build()?;

    // Blocking work inside an async main: move it off the runtime threads
    let (blocking, results) = tokio::task::spawn_blocking(move || {
        let results = blocking.run_blocking();
        (blocking, results)
    })
    .await?;
    let results = results?;
    println!("{}: {results}", blocking.name());
    println!("{}", generate_json_summary(&results.summary(blocking.name()))?);

    let mut suspending = Runner::suspending("sleep_1ms", || async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        Ok(())
    })
    .count(20)
    .setup(|| async {
        tracing::info!("warming caches");
        Ok(())
    })
    .build()?;

    let results = suspending.run().await?;
    println!("{}: {results}", suspending.name());

    Ok(())
}
