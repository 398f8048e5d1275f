//! Error handling for the session host

use thiserror::Error;

/// Agent error types
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Configuration error: {key}: {message}")]
    Config { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Unknown command: {0}")]
    Command(String),
}

impl AgentError {
    pub fn config(key: &str, message: impl Into<String>) -> Self {
        AgentError::Config {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;
