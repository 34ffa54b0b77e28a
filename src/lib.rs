//! fizzbuzz-bench library
//!
//! Times a divisibility-counting loop across several renditions.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use fizzbuzz_bench::{classify, measure, Triple};
//!
//! let (triple, sample) = measure(|| classify(6));
//! assert_eq!(triple, Triple::new(2, 1, 1));
//! assert_eq!(sample.millis(), sample.micros() / 1000);
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod harness;

pub use config::{AppConfig, ConfigError};
pub use counter::{
    classify, classify_bucketed, classify_opaque, classify_vectorized, Bucket, Forward, Triple,
    Variant,
};
pub use error::{Error, Result};
pub use harness::{measure, measure_forward, Harness, Measurement, TimingSample};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliArgs;

    /// **What is tested:** Basic library functionality integration test
    /// **Why it is tested:** Ensures config, counter and harness work together
    /// **Test conditions:** Config built from CLI arguments for n = 100, every variant
    /// **Expectations:** Report is produced and every variant agrees with `classify`
    #[test]
    fn test_basic_functionality() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let config = AppConfig::from_cli(CliArgs {
            count: 100,
            runs: 1,
            variants: vec![],
            all: true,
        })?;
        let mut output = Vec::new();

        let measurements = Harness::new(&config).run(&mut output)?;

        assert!(!output.is_empty());
        assert!(measurements.iter().all(|m| m.result == classify(100)));
        Ok(())
    }
}
