//! Configuration module for Watson service clients.
//!
//! Provides per-service configuration: base URL, API version date,
//! timeouts, default headers and optional retry settings.

use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use std::time::Duration;
use url::Url;

use crate::errors::{WatsonError, WatsonResult};
use crate::resilience::RetryConfig;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default IAM token endpoint host.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

/// Configuration for one Watson service client.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Service name used for environment lookup and the analytics header.
    pub service_name: String,
    /// Base URL for API requests, without a trailing slash.
    pub base_url: Url,
    /// API version date sent as the `version` query parameter.
    pub version: Option<String>,
    /// Request timeout applied by the HTTP client.
    pub timeout: Duration,
    /// Accept invalid TLS certificates.
    pub disable_ssl_verification: bool,
    /// Headers added to every request.
    pub default_headers: HeaderMap,
    /// Retry settings; `None` disables retries.
    pub retry: Option<RetryConfig>,
}

impl ServiceConfig {
    /// Creates a new configuration builder.
    pub fn builder(
        service_name: impl Into<String>,
        default_url: impl Into<String>,
    ) -> ServiceConfigBuilder {
        ServiceConfigBuilder::new(service_name, default_url)
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// With `SERVICE` being the upper-cased service name:
    ///
    /// - `SERVICE_URL` (optional): Custom base URL
    /// - `SERVICE_DISABLE_SSL` (optional): `true` to skip certificate checks
    /// - `SERVICE_TIMEOUT` (optional): Request timeout in seconds
    /// - `SERVICE_MAX_RETRIES` (optional): Enables retries with this limit
    pub fn from_env(
        service_name: impl Into<String>,
        default_url: impl Into<String>,
    ) -> WatsonResult<Self> {
        ServiceConfigBuilder::new(service_name, default_url)
            .apply_env()?
            .build()
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("service_name", &self.service_name)
            .field("base_url", &self.base_url.as_str())
            .field("version", &self.version)
            .field("timeout", &self.timeout)
            .field("disable_ssl_verification", &self.disable_ssl_verification)
            .field("default_headers", &self.default_headers.len())
            .field("retry", &self.retry)
            .finish()
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Debug)]
pub struct ServiceConfigBuilder {
    service_name: String,
    base_url: String,
    version: Option<String>,
    timeout: Option<Duration>,
    disable_ssl_verification: bool,
    default_headers: Vec<(String, String)>,
    retry: Option<RetryConfig>,
}

impl ServiceConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new(service_name: impl Into<String>, default_url: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            base_url: default_url.into(),
            version: None,
            timeout: None,
            disable_ssl_verification: false,
            default_headers: Vec::new(),
            retry: None,
        }
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the API version date.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disables TLS certificate verification.
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Enables retries.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Overrides settings from `<SERVICE>_*` environment variables.
    pub fn apply_env(mut self) -> WatsonResult<Self> {
        if let Some(url) = env_value(&self.service_name, "URL") {
            self.base_url = url;
        }

        if let Some(disable) = env_value(&self.service_name, "DISABLE_SSL") {
            self.disable_ssl_verification =
                parse_env(&self.service_name, "DISABLE_SSL", &disable)?;
        }

        if let Some(timeout) = env_value(&self.service_name, "TIMEOUT") {
            let secs: u64 = parse_env(&self.service_name, "TIMEOUT", &timeout)?;
            self.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(retries) = env_value(&self.service_name, "MAX_RETRIES") {
            let max_retries: u32 = parse_env(&self.service_name, "MAX_RETRIES", &retries)?;
            let retry = self.retry.take().unwrap_or_default();
            self.retry = Some(retry.with_max_retries(max_retries));
        }

        Ok(self)
    }

    /// Builds the configuration.
    pub fn build(self) -> WatsonResult<ServiceConfig> {
        if self.service_name.is_empty() {
            return Err(WatsonError::configuration("Service name cannot be empty"));
        }

        let trimmed = self.base_url.trim_end_matches('/');

        // Validate base URL
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(WatsonError::configuration(
                "Base URL must start with http:// or https://",
            ));
        }
        let base_url = Url::parse(trimmed)?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                WatsonError::configuration(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                WatsonError::configuration(format!("Invalid value for header '{}': {}", name, e))
            })?;
            default_headers.insert(header_name, header_value);
        }

        Ok(ServiceConfig {
            service_name: self.service_name,
            base_url,
            version: self.version,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            disable_ssl_verification: self.disable_ssl_verification,
            default_headers,
            retry: self.retry,
        })
    }
}

/// Environment variable name for a service setting, e.g.
/// `natural-language-classifier` + `URL` → `NATURAL_LANGUAGE_CLASSIFIER_URL`.
pub fn env_key(service_name: &str, suffix: &str) -> String {
    format!("{}_{}", service_name.to_uppercase().replace('-', "_"), suffix)
}

/// Reads a non-empty environment variable for a service setting.
pub(crate) fn env_value(service_name: &str, suffix: &str) -> Option<String> {
    std::env::var(env_key(service_name, suffix))
        .ok()
        .filter(|value| !value.is_empty())
}

fn parse_env<T: std::str::FromStr>(service_name: &str, suffix: &str, raw: &str) -> WatsonResult<T> {
    raw.trim().parse::<T>().map_err(|_| {
        WatsonError::configuration(format!(
            "{} has an invalid value: {}",
            env_key(service_name, suffix),
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://gateway.watsonplatform.net/tone-analyzer/api";

    #[test]
    fn test_config_builder_defaults() {
        let config = ServiceConfig::builder("tone_analyzer", URL).build().unwrap();

        assert_eq!(config.service_name, "tone_analyzer");
        assert_eq!(config.base_url.as_str(), URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.version.is_none());
        assert!(config.retry.is_none());
        assert!(!config.disable_ssl_verification);
    }

    #[test]
    fn test_config_builder_trailing_slash_stripped() {
        let config = ServiceConfig::builder("tone_analyzer", format!("{}/", URL))
            .version("2017-09-21")
            .build()
            .unwrap();

        assert_eq!(config.base_url.as_str(), URL);
        assert_eq!(config.version.as_deref(), Some("2017-09-21"));
    }

    #[test]
    fn test_config_builder_invalid_url() {
        let result = ServiceConfig::builder("tone_analyzer", "ftp://example.com").build();
        assert!(matches!(result, Err(WatsonError::Configuration { .. })));
    }

    #[test]
    fn test_config_builder_invalid_header() {
        let result = ServiceConfig::builder("tone_analyzer", URL)
            .header("bad header", "x")
            .build();
        assert!(matches!(result, Err(WatsonError::Configuration { .. })));
    }

    #[test]
    fn test_config_default_headers() {
        let config = ServiceConfig::builder("tone_analyzer", URL)
            .header("X-Watson-Learning-Opt-Out", "true")
            .build()
            .unwrap();
        assert_eq!(
            config.default_headers.get("x-watson-learning-opt-out").unwrap(),
            "true"
        );
    }

    #[test]
    fn test_env_key() {
        assert_eq!(
            env_key("natural-language-classifier", "URL"),
            "NATURAL_LANGUAGE_CLASSIFIER_URL"
        );
        assert_eq!(env_key("tone_analyzer", "APIKEY"), "TONE_ANALYZER_APIKEY");
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("CONFIG_ENV_TEST_URL", "http://localhost:9999/api/");
        std::env::set_var("CONFIG_ENV_TEST_TIMEOUT", "5");
        std::env::set_var("CONFIG_ENV_TEST_DISABLE_SSL", "true");
        std::env::set_var("CONFIG_ENV_TEST_MAX_RETRIES", "2");

        let config = ServiceConfig::from_env("config_env_test", URL).unwrap();

        assert_eq!(config.base_url.as_str(), "http://localhost:9999/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.disable_ssl_verification);
        assert_eq!(config.retry.map(|r| r.max_retries), Some(2));
    }

    #[test]
    fn test_config_from_env_invalid_timeout() {
        std::env::set_var("CONFIG_BAD_TIMEOUT_TEST_TIMEOUT", "soon");
        let result = ServiceConfig::from_env("config_bad_timeout_test", URL);
        assert!(matches!(result, Err(WatsonError::Configuration { .. })));
    }

    #[test]
    fn test_config_debug() {
        let config = ServiceConfig::builder("tone_analyzer", URL).build().unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("tone_analyzer"));
    }
}
