//! Configuration module for fizzbuzz-bench
//!
//! Turns command-line arguments into a validated [`AppConfig`].
//!
//! # Priority Logic
//!
//! 1. CLI parameters (highest priority)
//! 2. Hardcoded defaults (one run of the native variant)
//!
//! `--all` takes precedence over any explicit `--variant` list.
//!
//! # Usage
//!
//! ```rust
//! use fizzbuzz_bench::config::{AppConfig, CliArgs};
//! use fizzbuzz_bench::Variant;
//!
//! let cli_args = CliArgs {
//!     count: 100_000,
//!     runs: 3,
//!     variants: vec![Variant::Native, Variant::Opaque],
//!     all: false,
//! };
//!
//! let config = AppConfig::from_cli(cli_args)?;
//! assert_eq!(config.runs(), 3);
//! # Ok::<(), fizzbuzz_bench::ConfigError>(())
//! ```

pub mod app_config;

pub use app_config::{AppConfig, CliArgs, ConfigBuilder};

use thiserror::Error;

/// Errors raised while resolving the application configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid CLI argument value
    #[error("Invalid CLI argument: {argument}='{value}' (expected: {expected})")]
    InvalidCliArgument {
        argument: String,
        value: String,
        expected: String,
    },
}
