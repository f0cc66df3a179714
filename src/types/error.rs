use thiserror::Error;

/// heatcard error types
#[derive(Error, Debug)]
pub enum HeatcardError {
    /// Input document or date could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Unknown or unsupported range flag
    #[error("invalid range: '{0}', must be one of today, yesterday, 7d, 30d, 6m, 1y, all, or a year (e.g. 2024)")]
    Range(String),
}

/// Result type alias for heatcard
pub type Result<T> = std::result::Result<T, HeatcardError>;
