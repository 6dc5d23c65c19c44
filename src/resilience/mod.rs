//! Resilience patterns for the Watson API client.
//!
//! Retries are opt-in: a [`RetryingTransport`] is installed only when the
//! service configuration carries a [`RetryConfig`].

mod retry;

pub use retry::{RetryConfig, RetryingTransport};
