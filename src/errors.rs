//! Unified error types and result handling.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: i64, max: i64 },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
