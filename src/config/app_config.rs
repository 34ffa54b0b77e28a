//! Application configuration module
//!
//! This module provides the main application configuration structure built
//! from CLI arguments with a clear priority system.

use super::ConfigError;
use crate::counter::Variant;

/// CLI arguments structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Exclusive upper bound of the classified range
    pub count: i64,
    /// Number of independent runs
    pub runs: usize,
    /// Variants to measure, in order
    pub variants: Vec<Variant>,
    /// Measure every variant (overrides `variants`)
    pub all: bool,
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    count: i64,
    runs: usize,
    variants: Vec<Variant>,
}

/// Configuration builder for functional composition
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    count: i64,
    runs: Option<usize>,
    variants: Option<Vec<Variant>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    #[must_use]
    pub const fn new(count: i64) -> Self {
        Self {
            count,
            runs: None,
            variants: None,
        }
    }

    /// Set the number of runs
    #[must_use]
    pub const fn with_runs(mut self, runs: usize) -> Self {
        self.runs = Some(runs);
        self
    }

    /// Set the variants to measure
    #[must_use]
    pub fn with_variants(mut self, variants: Vec<Variant>) -> Self {
        self.variants = Some(variants);
        self
    }

    /// Build the final AppConfig
    pub fn build(self) -> AppConfig {
        AppConfig {
            count: self.count,
            runs: self.runs.unwrap_or(1),
            variants: self.variants.unwrap_or_else(Self::default_variants),
        }
    }

    fn default_variants() -> Vec<Variant> {
        vec![Variant::Native]
    }
}

impl AppConfig {
    /// Create AppConfig from CLI arguments
    ///
    /// Rejects zero runs and an empty variant list. Repeated variants are
    /// measured once, in the order they were first named.
    pub fn from_cli(cli_args: CliArgs) -> Result<Self, ConfigError> {
        let builder = ConfigBuilder::new(cli_args.count)
            .with_runs(Self::resolve_runs(&cli_args)?)
            .with_variants(Self::resolve_variants(&cli_args)?);

        Ok(builder.build())
    }

    fn resolve_runs(cli_args: &CliArgs) -> Result<usize, ConfigError> {
        (cli_args.runs > 0)
            .then_some(cli_args.runs)
            .ok_or_else(|| ConfigError::InvalidCliArgument {
                argument: "--runs".to_owned(),
                value: cli_args.runs.to_string(),
                expected: "a positive number of runs".to_owned(),
            })
    }

    fn resolve_variants(cli_args: &CliArgs) -> Result<Vec<Variant>, ConfigError> {
        if cli_args.all {
            return Ok(Variant::ALL.to_vec());
        }

        let variants = cli_args
            .variants
            .iter()
            .enumerate()
            .filter(|&(i, v)| !cli_args.variants[..i].contains(v))
            .map(|(_, v)| *v)
            .collect::<Vec<_>>();

        (!variants.is_empty())
            .then_some(variants)
            .ok_or_else(|| ConfigError::InvalidCliArgument {
                argument: "--variant".to_owned(),
                value: String::new(),
                expected: "at least one variant".to_owned(),
            })
    }

    /// Exclusive upper bound of the classified range
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Number of independent runs
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Variants to measure, in report order
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}
