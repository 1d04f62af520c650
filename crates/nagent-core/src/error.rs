//! Error Types

use thiserror::Error;

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent error types
#[derive(Error, Debug)]
pub enum AgentError {
    /// Upstream rejected the call due to rate limiting
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Upstream call timed out
    #[error("Upstream timeout: {0}")]
    Timeout(String),

    /// Upstream service is unavailable or unreachable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Upstream rejected the request as malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Model output could not be parsed into the expected structure
    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    /// Tool execution failed
    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The invocation was cancelled by the caller
    #[error("Operation cancelled")]
    Cancelled,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<anyhow::Error> for AgentError {
    fn from(err: anyhow::Error) -> Self {
        AgentError::ToolExecution(err.to_string())
    }
}

impl AgentError {
    /// Check if error is retryable (transient upstream failure)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AgentError::RateLimited(_)
                | AgentError::Timeout(_)
                | AgentError::ServiceUnavailable(_)
        )
    }
}
