//! Configuration loading from bench.toml
//!
//! Settings can be specified in a `bench.toml` file, discovered by
//! walking up from the current directory. CLI flags override file
//! values; file values override the built-in defaults.

use algobench_algos::input::DEFAULT_SEED;
use algobench_core::DEFAULT_REPETITIONS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BenchConfig {
    /// Runner configuration.
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Trials per workload batch.
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    /// Seed for the input generator.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            repetitions: default_repetitions(),
            seed: default_seed(),
        }
    }
}

fn default_repetitions() -> u32 {
    DEFAULT_REPETITIONS
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Formats to render: table, csv, chart, json.
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    /// Directory for file formats.
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            formats: default_formats(),
            directory: default_directory(),
        }
    }
}

fn default_formats() -> Vec<String> {
    vec!["table".to_string()]
}
fn default_directory() -> String {
    "target/algobench".to_string()
}

impl BenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover `bench.toml` by walking up from the current directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("bench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.runner.repetitions, 100);
        assert_eq!(config.runner.seed, DEFAULT_SEED);
        assert_eq!(config.output.formats, vec!["table".to_string()]);
        assert_eq!(config.output.directory, "target/algobench");
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let toml_str = r#"
            [runner]
            repetitions = 500

            [output]
            formats = ["table", "csv"]
        "#;

        let config: BenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.runner.repetitions, 500);
        assert_eq!(config.runner.seed, DEFAULT_SEED);
        assert_eq!(config.output.formats.len(), 2);
        assert_eq!(config.output.directory, "target/algobench");
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: BenchConfig = toml::from_str("").unwrap();
        assert_eq!(config.runner.repetitions, 100);
    }
}
