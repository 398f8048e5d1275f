//! Error types for wordgame-core.

use thiserror::Error;

/// Result type alias using SourceError.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors a word source can report.
///
/// None of these reach the speaker: the word pool recovers from every variant
/// by substituting the built-in vocabulary.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("word source is not configured")]
    NotConfigured,

    #[error("word source request failed: {0}")]
    Request(String),

    #[error("word source returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid word source response: {0}")]
    Decode(String),
}
