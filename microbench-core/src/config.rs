//! Configuration
//!
//! [`BenchmarkConfig`] is the validated per-runner configuration. Defaults for
//! it can also come from a `microbench.toml` file, discovered by walking up
//! from the current directory.

use crate::BenchError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Timed iterations when nothing else is configured
pub const DEFAULT_COUNT: usize = 100;

/// Untimed `execute` calls made before measurement when warmup is on
pub const WARMUP_ITERATIONS: usize = 5;

/// File name looked up by [`FileConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "microbench.toml";

/// Validated configuration of a single benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    name: String,
    count: usize,
    warmup: bool,
}

impl BenchmarkConfig {
    /// Create a configuration, rejecting a zero iteration count.
    pub fn new(name: impl Into<String>, count: usize, warmup: bool) -> Result<Self, BenchError> {
        let name = name.into();
        if count == 0 {
            return Err(BenchError::InvalidConfiguration { name, count });
        }
        Ok(Self {
            name,
            count,
            warmup,
        })
    }

    /// Benchmark name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of timed iterations (always > 0)
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the warmup iterations run
    pub fn warmup(&self) -> bool {
        self.warmup
    }
}

/// Contents of `microbench.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Runner defaults
    #[serde(default)]
    pub runner: RunnerDefaults,
}

/// Default runner settings applied by [`RunnerBuilder::defaults`](crate::RunnerBuilder::defaults)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunnerDefaults {
    /// Timed iterations per run
    #[serde(default = "default_count")]
    pub count: usize,
    /// Run warmup iterations before measuring
    #[serde(default = "default_warmup")]
    pub warmup: bool,
}

impl Default for RunnerDefaults {
    fn default() -> Self {
        Self {
            count: default_count(),
            warmup: default_warmup(),
        }
    }
}

fn default_count() -> usize {
    DEFAULT_COUNT
}
fn default_warmup() -> bool {
    true
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for `microbench.toml`
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), "ignoring unreadable config: {e}");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# microbench configuration

[runner]
# Timed iterations per benchmark (must be > 0)
count = 100
# Run 5 untimed iterations before measuring
warmup = true
"#
        .to_string()
    }
}
