//! Error types for ytsum.

use thiserror::Error;

/// Library-level error type for summarization operations.
///
/// Each pipeline stage maps its failures into one variant; the API layer
/// reports the first one it sees as the request's error message.
#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch video info: {0}")]
    MetadataFetch(String),

    #[error("Failed to fetch transcript: {0}")]
    TranscriptFetch(String),

    #[error("Failed to generate summary: {0}")]
    Generation(String),

    #[error("Invalid summary format: {0}")]
    MalformedSummary(String),

    #[error("Failed to connect to the summarizer API: {0}")]
    UpstreamConnection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for ytsum operations.
pub type Result<T> = std::result::Result<T, SummarizerError>;
