//! Error types for the Watson API client.

use crate::errors::categories::{ErrorCategory, ValidationDetail};
use http::HeaderMap;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for Watson operations
pub type WatsonResult<T> = Result<T, WatsonError>;

/// Main error type for the Watson API client.
///
/// Every operation returns this type. Non-2xx responses surface as
/// [`WatsonError::Api`] carrying the status, headers and raw body so callers
/// can inspect service-specific error payloads.
#[derive(Error, Debug, Clone)]
pub enum WatsonError {
    /// Configuration error (invalid URL, empty version, malformed credentials)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Validation error (missing required option fields, empty path parameters)
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue
        message: String,
        /// List of specific validation failures
        details: Vec<ValidationDetail>,
    },

    /// Authentication error (IAM token could not be obtained)
    #[error("Authentication error: {message}")]
    Authentication {
        /// Error message describing the authentication issue
        message: String,
    },

    /// Network error (connection failed, DNS issues, broken body)
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// The HTTP client gave up waiting for the server
    #[error("Request timed out: {message}")]
    Timeout {
        /// Error message from the HTTP client
        message: String,
    },

    /// The caller-imposed deadline elapsed before the call completed
    #[error("Deadline of {deadline:?} exceeded")]
    DeadlineExceeded {
        /// The deadline that was exceeded
        deadline: Duration,
    },

    /// Non-2xx response from a Watson service
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body
        message: String,
        /// Response headers
        headers: HeaderMap,
        /// Raw response body
        body: String,
    },

    /// A 2xx response body did not match the expected shape
    #[error("Deserialization error: {message}")]
    Deserialization {
        /// Error message from the decoder
        message: String,
        /// Raw response body
        body: String,
    },

    /// The request body could not be encoded
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message from the encoder
        message: String,
    },

    /// Internal error (unexpected conditions, library bugs)
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal issue
        message: String,
    },
}

impl WatsonError {
    /// Build a validation error from a list of field failures.
    pub fn validation(message: impl Into<String>, details: Vec<ValidationDetail>) -> Self {
        WatsonError::Validation {
            message: message.into(),
            details,
        }
    }

    /// Build a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        WatsonError::Configuration {
            message: message.into(),
        }
    }

    /// Returns true if this error is worth retrying.
    ///
    /// Retryable errors include:
    /// - Network errors and client timeouts
    /// - 429 responses
    /// - 5xx responses other than 501
    pub fn is_retryable(&self) -> bool {
        match self {
            WatsonError::Network { .. } | WatsonError::Timeout { .. } => true,
            WatsonError::Api { status, .. } => {
                *status == 429 || (*status >= 500 && *status != 501)
            }
            _ => false,
        }
    }

    /// Returns the `Retry-After` duration if the server sent one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            WatsonError::Api { headers, .. } => headers
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs),
            _ => None,
        }
    }

    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            WatsonError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            WatsonError::Configuration { .. } => ErrorCategory::Configuration,
            WatsonError::Validation { .. } => ErrorCategory::Validation,
            WatsonError::Authentication { .. } => ErrorCategory::Authentication,
            WatsonError::Network { .. } | WatsonError::Timeout { .. } => ErrorCategory::Network,
            WatsonError::DeadlineExceeded { .. } => ErrorCategory::Deadline,
            WatsonError::Api { status, .. } if *status >= 500 => ErrorCategory::Server,
            WatsonError::Api { .. } => ErrorCategory::Client,
            WatsonError::Deserialization { .. } | WatsonError::Serialization { .. } => {
                ErrorCategory::Encoding
            }
            WatsonError::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

// Conversions from common error types
impl From<reqwest::Error> for WatsonError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WatsonError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            WatsonError::Network {
                message: format!("Connection failed: {}", err),
            }
        } else if err.is_builder() {
            WatsonError::Configuration {
                message: format!("Invalid request: {}", err),
            }
        } else {
            WatsonError::Network {
                message: format!("Network error: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for WatsonError {
    fn from(err: serde_json::Error) -> Self {
        WatsonError::Serialization {
            message: format!("JSON serialization error: {}", err),
        }
    }
}

impl From<url::ParseError> for WatsonError {
    fn from(err: url::ParseError) -> Self {
        WatsonError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

impl From<std::io::Error> for WatsonError {
    fn from(err: std::io::Error) -> Self {
        WatsonError::Network {
            message: format!("IO error: {}", err),
        }
    }
}
