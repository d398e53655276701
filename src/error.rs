//! Common error types for subjgen

use thiserror::Error;

/// Common result type for subjgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for playlist generation
#[derive(Error, Debug)]
pub enum Error {
    /// The requested identifier count exceeds the primes available in range
    #[error(
        "not enough primes in [{low}, {high}]: requested {requested}, found {available}"
    )]
    InsufficientPrimes {
        requested: usize,
        available: usize,
        low: u64,
        high: u64,
    },

    /// Session count is zero or exceeds the number of test stimuli
    #[error("cannot split {stimuli} test stimuli into {sessions} sessions")]
    InvalidSessionSplit { sessions: usize, stimuli: usize },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
