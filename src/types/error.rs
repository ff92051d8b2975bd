use thiserror::Error;

/// tokendash error types
#[derive(Error, Debug)]
pub enum TokendashError {
    /// Failed to parse JSON/JSONL
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Usage snapshot missing or malformed
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for tokendash
pub type Result<T> = std::result::Result<T, TokendashError>;
