//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A fixture string could not be parsed
    #[error("invalid fixture at line {line}: {message}")]
    InvalidFixture { line: usize, message: String },

    /// A random grid density outside `0.0..=1.0`
    #[error("density {0} not in 0.0..=1.0")]
    InvalidDensity(f64),

    /// Grid construction failed
    #[error("grid error: {0}")]
    Grid(#[from] bwlabel_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
