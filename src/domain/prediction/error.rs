//! Prediction request errors

use thiserror::Error;

/// A prediction call failed before producing a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The endpoint could not be reached
    #[error("Network error: {message}")]
    Network { message: String },

    /// No response within the configured timeout
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The endpoint answered with a non-2xx status
    #[error("Prediction service returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The body could not be read as the expected shape
    #[error("Invalid response from prediction service: {message}")]
    InvalidResponse { message: String },

    /// The caller abandoned the request
    #[error("Request cancelled")]
    Cancelled,
}

impl RequestError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout { timeout_ms }
    }

    pub fn status(status: u16, detail: impl Into<String>) -> Self {
        Self::Status {
            status,
            detail: detail.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RequestError::network("connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = RequestError::timeout(30_000);
        assert_eq!(err.to_string(), "Request timed out after 30000ms");

        let err = RequestError::status(400, "could not convert string to float");
        assert_eq!(
            err.to_string(),
            "Prediction service returned HTTP 400: could not convert string to float"
        );

        let err = RequestError::invalid_response("missing field `prediction`");
        assert!(err.to_string().contains("missing field"));

        assert_eq!(RequestError::Cancelled.to_string(), "Request cancelled");
    }
}
