//! Error definitions for the relay pipeline.

use thiserror::Error;

/// Errors that can occur while handling a relay request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A required inbound field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The method field does not name a usable HTTP method.
    #[error("invalid HTTP method: {0}")]
    Method(String),

    /// The outbound call failed at the transport level.
    #[error("transport error: {0}")]
    Transport(String),

    /// The downstream body was not valid JSON.
    #[error("invalid JSON from downstream: {0}")]
    Decode(String),
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RelayError::MissingField("key");
        assert_eq!(err.to_string(), "missing required field: key");

        let err = RelayError::Transport("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }
}
