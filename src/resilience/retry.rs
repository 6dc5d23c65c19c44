//! Retry logic with exponential backoff.

use crate::errors::{WatsonError, WatsonResult};
use crate::transport::{HttpRequest, HttpTransport, TransportResponse};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Initial delay between retries
    pub initial_delay: Duration,
    /// Maximum delay between retries
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub multiplier: f64,
    /// Jitter factor (0.0 to 1.0) to randomize delays
    pub jitter: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            multiplier: 2.0,
            jitter: 0.1,
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the initial delay
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff multiplier
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the jitter factor
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.clamp(0.0, 1.0);
        self
    }

    /// Calculate the delay for a given attempt number (1-based)
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        let base_delay = self.initial_delay.as_millis() as f64
            * self.multiplier.powi(attempt.saturating_sub(1) as i32);

        let delay_ms = base_delay.min(self.max_delay.as_millis() as f64);

        // Apply jitter
        let jitter_range = delay_ms * self.jitter;
        let jitter_offset = rand::random::<f64>() * jitter_range * 2.0 - jitter_range;
        let final_delay_ms = (delay_ms + jitter_offset).clamp(0.0, self.max_delay.as_millis() as f64);

        Duration::from_millis(final_delay_ms as u64)
    }

    /// Delay before the given retry, preferring the server's `Retry-After`
    pub fn delay_for(&self, attempt: u32, error: &WatsonError) -> Duration {
        error
            .retry_after()
            .map(|d| d.min(self.max_delay))
            .unwrap_or_else(|| self.calculate_delay(attempt))
    }
}

/// Transport wrapper that retries retryable failures.
///
/// Requests whose body holds a streamed part are sent exactly once.
pub struct RetryingTransport {
    inner: Arc<dyn HttpTransport>,
    config: RetryConfig,
}

impl RetryingTransport {
    /// Wrap a transport
    pub fn new(inner: Arc<dyn HttpTransport>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// The retry configuration in use
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

#[async_trait]
impl HttpTransport for RetryingTransport {
    async fn send(&self, request: HttpRequest) -> WatsonResult<TransportResponse> {
        let template = match request.try_clone() {
            Some(template) => template,
            None => {
                debug!(url = %request.url, "request body is streamed; sending without retries");
                return self.inner.send(request).await;
            }
        };

        let mut attempt = 0;
        let mut next = request;
        loop {
            match self.inner.send(next).await {
                Ok(response) => return Ok(response),
                Err(error) if error.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = self.config.delay_for(attempt, &error);
                    warn!(
                        attempt,
                        max_retries = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "retrying request"
                    );
                    tokio::time::sleep(delay).await;
                    next = template.try_clone().ok_or_else(|| WatsonError::Internal {
                        message: "request body could not be replayed".to_string(),
                    })?;
                }
                Err(error) => return Err(error),
            }
        }
    }
}
