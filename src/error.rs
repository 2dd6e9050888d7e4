//! Error Types
//!
//! Failures of the HTTP layer and of client-side form validation.

use thiserror::Error;

/// Anything that can go wrong talking to the bookmark server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not valid JSON
    #[error("invalid JSON response: {0}")]
    Decode(String),

    /// Valid JSON, but not the shape we expect
    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Text suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Form input rejected before any request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select or enter a group name")]
    MissingGroupName,

    #[error("Please select a config file")]
    MissingConfigFile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_shows_server_message() {
        let err = ApiError::Status { status: 400, message: "Missing required fields".into() };
        assert_eq!(err.user_message(), "Missing required fields");
        assert_eq!(err.to_string(), "server returned 400: Missing required fields");
    }

    #[test]
    fn test_network_error_message() {
        let err = ApiError::Network("Failed to fetch".into());
        assert_eq!(err.user_message(), "network error: Failed to fetch");
    }
}
