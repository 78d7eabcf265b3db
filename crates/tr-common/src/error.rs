//! Error types for trend report generation.

use thiserror::Error;

/// Result type alias for trend report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for trend report generation.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    // Row source errors (20-29)
    #[error("row source error: {0}")]
    Source(String),

    // Chart rendering errors (40-49)
    #[error("chart rendering failed: {0}")]
    Chart(String),

    // Document composition errors (50-59)
    #[error("document composition failed: {0}")]
    Compose(String),

    #[error("template rendering failed: {0}")]
    Template(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::Source(_) => 20,
            Error::Chart(_) => 40,
            Error::Compose(_) => 50,
            Error::Template(_) => 51,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
