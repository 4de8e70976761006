//! Error types for vidrank.

use thiserror::Error;

/// Library-level error type for vidrank operations.
#[derive(Error, Debug)]
pub enum VidrankError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Video search error: {0}")]
    Search(String),

    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for vidrank operations.
pub type Result<T> = std::result::Result<T, VidrankError>;
