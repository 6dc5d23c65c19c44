//! Error categories and validation details for the Watson API client.

use crate::errors::error::{WatsonError, WatsonResult};
use serde::{Deserialize, Serialize};

/// Detailed information about a validation failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationDetail {
    /// The field that failed validation
    pub field: String,
    /// The error message for this field
    pub message: String,
    /// The invalid value (if available and safe to include)
    pub value: Option<String>,
}

impl ValidationDetail {
    /// Create a new validation detail
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Create a new validation detail with a value
    pub fn with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: Some(value.into()),
        }
    }
}

/// Collects missing-field failures for an options struct.
///
/// Options structs call this from their `validate` method; nothing is sent
/// when any required field is absent.
#[derive(Debug)]
pub struct RequiredFields {
    options: &'static str,
    details: Vec<ValidationDetail>,
}

impl RequiredFields {
    /// Start checking the named options struct
    pub fn new(options: &'static str) -> Self {
        Self {
            options,
            details: Vec::new(),
        }
    }

    /// Require an optional value to be present
    pub fn value<T>(mut self, field: &str, value: &Option<T>) -> Self {
        if value.is_none() {
            self.details
                .push(ValidationDetail::new(field, format!("{} is required", field)));
        }
        self
    }

    /// Require a string to be present and non-empty
    pub fn string(mut self, field: &str, value: &Option<String>) -> Self {
        match value {
            None => self
                .details
                .push(ValidationDetail::new(field, format!("{} is required", field))),
            Some(s) if s.is_empty() => self.details.push(ValidationDetail::new(
                field,
                format!("{} must not be empty", field),
            )),
            Some(_) => {}
        }
        self
    }

    /// Require a list to be present and contain at least one item
    pub fn list<T>(mut self, field: &str, value: &Option<Vec<T>>) -> Self {
        match value {
            Some(items) if !items.is_empty() => {}
            _ => self.details.push(ValidationDetail::new(
                field,
                format!("{} must contain at least one item", field),
            )),
        }
        self
    }

    /// Record an arbitrary failure when `condition` is false
    pub fn check(mut self, condition: bool, field: &str, message: &str) -> Self {
        if !condition {
            self.details.push(ValidationDetail::new(field, message));
        }
        self
    }

    /// Finish, returning a validation error if anything was missing
    pub fn finish(self) -> WatsonResult<()> {
        if self.details.is_empty() {
            Ok(())
        } else {
            Err(WatsonError::Validation {
                message: format!(
                    "{} validation failed: {} error(s)",
                    self.options,
                    self.details.len()
                ),
                details: self.details,
            })
        }
    }
}

/// Error category for classification and handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Client configuration errors
    Configuration,
    /// Authentication failures
    Authentication,
    /// Request validation errors
    Validation,
    /// Network connectivity issues and client timeouts
    Network,
    /// Caller deadline expired
    Deadline,
    /// 4xx responses
    Client,
    /// 5xx responses
    Server,
    /// Body encoding or decoding failures
    Encoding,
    /// Internal library errors
    Internal,
}

impl ErrorCategory {
    /// Get a human-readable description of this category
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "Configuration error",
            ErrorCategory::Authentication => "Authentication error",
            ErrorCategory::Validation => "Validation error",
            ErrorCategory::Network => "Network error",
            ErrorCategory::Deadline => "Deadline exceeded",
            ErrorCategory::Client => "Client error",
            ErrorCategory::Server => "Server error",
            ErrorCategory::Encoding => "Encoding error",
            ErrorCategory::Internal => "Internal error",
        }
    }
}
