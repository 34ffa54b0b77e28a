//! Error handling module
//!
//! Unified error type for fizzbuzz-bench. Configuration problems are reported
//! separately through [`crate::ConfigError`] before any measurement starts.

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// Writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
